//! Admin and artist login gates.
//!
//! Credentials are matched exactly against the store's records. A failure
//! never says whether the email or the password was wrong.

use serde::Serialize;
use thiserror::Error;

use crate::{artist::Artist, store::PlatformStore, user::User};

#[derive(Debug, Error)]
pub enum LoginError {
  #[error("Invalid email or password")]
  InvalidCredentials,

  /// The credentials matched but point at an artist that does not exist.
  #[error("Artist profile not found")]
  ArtistProfileNotFound,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> LoginError {
  LoginError::Store(Box::new(e))
}

/// Who signed in to the admin portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
  pub email: String,
  /// The matching account, when one is on record.
  pub user:  Option<User>,
}

pub async fn authenticate_admin<S: PlatformStore>(
  store: &S,
  email: &str,
  password: &str,
) -> Result<AdminIdentity, LoginError> {
  let credential = store
    .find_admin_credential(email)
    .await
    .map_err(store_err)?
    .filter(|c| c.password == password)
    .ok_or(LoginError::InvalidCredentials)?;

  let user = store
    .list_users()
    .await
    .map_err(store_err)?
    .into_iter()
    .find(|u| u.email == credential.email);

  Ok(AdminIdentity { email: credential.email, user })
}

pub async fn authenticate_artist<S: PlatformStore>(
  store: &S,
  email: &str,
  password: &str,
) -> Result<Artist, LoginError> {
  let credential = store
    .find_artist_credential(email)
    .await
    .map_err(store_err)?
    .filter(|c| c.password == password)
    .ok_or(LoginError::InvalidCredentials)?;

  store
    .get_artist(&credential.artist_id)
    .await
    .map_err(store_err)?
    .ok_or(LoginError::ArtistProfileNotFound)
}

/// The email and password that open `artist_id`'s portal, for prefilling the
/// demo login form.
pub async fn demo_credentials<S: PlatformStore>(
  store: &S,
  artist_id: &str,
) -> Result<Option<(String, String)>, LoginError> {
  let credential = store.artist_credential_for(artist_id).await.map_err(store_err)?;
  Ok(credential.map(|c| (c.email, c.password)))
}

// ─── Form state ──────────────────────────────────────────────────────────────

/// The state behind a login screen: typed input plus the last error shown.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
  pub email:    String,
  pub password: String,
  pub error:    Option<String>,
}

impl LoginForm {
  /// Fill in the demo login for `artist_id`, if it has one.
  pub async fn prefill_artist<S: PlatformStore>(
    &mut self,
    store: &S,
    artist_id: &str,
  ) -> Result<bool, LoginError> {
    match demo_credentials(store, artist_id).await? {
      Some((email, password)) => {
        self.email = email;
        self.password = password;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  pub async fn submit_admin<S: PlatformStore>(
    &mut self,
    store: &S,
  ) -> Option<AdminIdentity> {
    self.error = None;
    let result = authenticate_admin(store, &self.email, &self.password).await;
    self.settle(result)
  }

  pub async fn submit_artist<S: PlatformStore>(&mut self, store: &S) -> Option<Artist> {
    self.error = None;
    let result = authenticate_artist(store, &self.email, &self.password).await;
    self.settle(result)
  }

  fn settle<T>(&mut self, result: Result<T, LoginError>) -> Option<T> {
    match result {
      Ok(identity) => Some(identity),
      Err(e) => {
        self.error = Some(e.to_string());
        None
      }
    }
  }
}
