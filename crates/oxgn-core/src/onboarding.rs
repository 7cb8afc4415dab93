//! The first-run onboarding flow: pick an artist, pay, land on the welcome
//! screen.
//!
//! ```text
//! Discovery ──subscribe──▶ Checkout ──submit_payment──▶ Success ──finish──▶ Complete
//!     ▲                       │
//!     └─────────back──────────┘
//! ```
//!
//! Each state carries exactly the data it needs, and the accumulated
//! [`UserData`] travels alongside. A rejected payment form leaves the flow in
//! `Checkout` with field-level errors; the fan fixes the form and resubmits.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  artist::{Artist, ArtistSnapshot},
  billing::{Charge, PaymentProcessor, Receipt},
  checkout::{PaymentForm, Quote},
};

// ─── User data ───────────────────────────────────────────────────────────────

/// What the flow has learned about the fan so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
  pub email:           String,
  pub first_name:      String,
  pub last_name:       String,
  pub interests:       Vec<String>,
  pub selected_artist: Option<ArtistSnapshot>,
}

impl Default for UserData {
  /// The prefilled demo visitor.
  fn default() -> Self {
    Self {
      email:           "demo@example.com".into(),
      first_name:      "Demo".into(),
      last_name:       "User".into(),
      interests:       vec!["music".into()],
      selected_artist: None,
    }
  }
}

/// A partial update to [`UserData`]; only `Some` fields overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDataPatch {
  pub email:           Option<String>,
  pub first_name:      Option<String>,
  pub last_name:       Option<String>,
  pub interests:       Option<Vec<String>>,
  pub selected_artist: Option<ArtistSnapshot>,
}

impl UserData {
  pub fn merge(&mut self, patch: UserDataPatch) {
    if let Some(v) = patch.email {
      self.email = v;
    }
    if let Some(v) = patch.first_name {
      self.first_name = v;
    }
    if let Some(v) = patch.last_name {
      self.last_name = v;
    }
    if let Some(v) = patch.interests {
      self.interests = v;
    }
    if let Some(v) = patch.selected_artist {
      self.selected_artist = Some(v);
    }
  }
}

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum OnboardingState {
  Discovery,
  Checkout { artist: ArtistSnapshot },
  Success { artist: ArtistSnapshot, receipt: Receipt },
  Complete,
}

impl OnboardingState {
  pub fn name(&self) -> &'static str {
    match self {
      Self::Discovery => "discovery",
      Self::Checkout { .. } => "checkout",
      Self::Success { .. } => "success",
      Self::Complete => "complete",
    }
  }

  fn reject(&self, action: &'static str) -> Error {
    Error::InvalidTransition { state: self.name(), action }
  }
}

// ─── Flow ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct OnboardingFlow {
  state:     OnboardingState,
  user_data: UserData,
}

impl Default for OnboardingFlow {
  fn default() -> Self { Self::new(UserData::default()) }
}

impl OnboardingFlow {
  pub fn new(user_data: UserData) -> Self {
    Self { state: OnboardingState::Discovery, user_data }
  }

  pub fn state(&self) -> &OnboardingState { &self.state }

  pub fn user_data(&self) -> &UserData { &self.user_data }

  /// Choose `artist` and confirm the subscription: `Discovery → Checkout`.
  pub async fn subscribe<P: PaymentProcessor>(
    &mut self,
    artist: &Artist,
    processor: &P,
  ) -> Result<()> {
    if self.state != OnboardingState::Discovery {
      return Err(self.state.reject("subscribe"));
    }

    let snapshot = artist.snapshot();
    processor
      .confirm_subscription(&snapshot)
      .await
      .map_err(|e| Error::Payment(Box::new(e)))?;

    self.user_data.merge(UserDataPatch {
      selected_artist: Some(snapshot.clone()),
      ..UserDataPatch::default()
    });
    self.state = OnboardingState::Checkout { artist: snapshot };
    Ok(())
  }

  /// Return to artist selection: `Checkout → Discovery`.
  pub fn back(&mut self) -> Result<()> {
    match self.state {
      OnboardingState::Checkout { .. } => {
        self.state = OnboardingState::Discovery;
        Ok(())
      }
      _ => Err(self.state.reject("go back")),
    }
  }

  /// The price breakdown for the chosen artist, once one is chosen.
  pub fn quote(&self) -> Option<Quote> {
    match &self.state {
      OnboardingState::Checkout { artist }
      | OnboardingState::Success { artist, .. } => {
        Some(Quote::for_price(artist.subscription_price))
      }
      _ => None,
    }
  }

  /// Validate `form` and charge the fan: `Checkout → Success`.
  ///
  /// Field errors come back as [`Error::Checkout`] and leave the flow in
  /// `Checkout`, as does a processor failure.
  pub async fn submit_payment<P: PaymentProcessor>(
    &mut self,
    form: &PaymentForm,
    processor: &P,
  ) -> Result<Receipt> {
    let OnboardingState::Checkout { artist } = &self.state else {
      return Err(self.state.reject("submit payment"));
    };
    let artist = artist.clone();

    form.validate().map_err(Error::Checkout)?;

    let charge = Charge {
      artist_id:  artist.id.clone(),
      email:      form.email.clone(),
      card_last4: form.card_last4(),
      quote:      Quote::for_price(artist.subscription_price),
    };
    let receipt = processor
      .charge(&charge)
      .await
      .map_err(|e| Error::Payment(Box::new(e)))?;

    self.state = OnboardingState::Success { artist, receipt: receipt.clone() };
    Ok(receipt)
  }

  /// Leave the welcome screen: `Success → Complete`, handing the final
  /// [`UserData`] to `on_complete`.
  pub fn finish<F: FnOnce(&UserData)>(&mut self, on_complete: F) -> Result<()> {
    if !matches!(self.state, OnboardingState::Success { .. }) {
      return Err(self.state.reject("finish"));
    }
    self.state = OnboardingState::Complete;
    on_complete(&self.user_data);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::{
    convert::Infallible,
    sync::atomic::{AtomicUsize, Ordering},
  };

  use chrono::{TimeZone, Utc};

  use super::*;
  use crate::{Money, checkout::Field};

  #[derive(Default)]
  struct InstantProcessor {
    charges: AtomicUsize,
  }

  impl PaymentProcessor for InstantProcessor {
    type Error = Infallible;

    async fn confirm_subscription(&self, _: &ArtistSnapshot) -> Result<(), Infallible> {
      Ok(())
    }

    async fn charge(&self, charge: &Charge) -> Result<Receipt, Infallible> {
      self.charges.fetch_add(1, Ordering::SeqCst);
      Ok(Receipt::new(charge, Utc::now()))
    }
  }

  struct DecliningProcessor;

  impl PaymentProcessor for DecliningProcessor {
    type Error = std::io::Error;

    async fn confirm_subscription(&self, _: &ArtistSnapshot) -> Result<(), std::io::Error> {
      Ok(())
    }

    async fn charge(&self, _: &Charge) -> Result<Receipt, std::io::Error> {
      Err(std::io::Error::other("card declined"))
    }
  }

  fn luna() -> Artist {
    Artist {
      id:                 "luna-echo".into(),
      user_id:            "user-artist-1".into(),
      username:           "lunaecho".into(),
      display_name:       "Luna Echo".into(),
      avatar_url:         String::new(),
      banner_url:         String::new(),
      story:              String::new(),
      location:           "Portland, OR".into(),
      cause:              "Mental Health Awareness".into(),
      subscription_price: Money::from_cents(899),
      subscriber_count:   2847,
      is_verified:        true,
      created_at:         Utc.with_ymd_and_hms(2023, 8, 12, 14, 30, 0).unwrap(),
    }
  }

  fn card() -> PaymentForm {
    let mut form = PaymentForm::default();
    form.set(Field::Email, "demo@example.com");
    form.set(Field::CardNumber, "4242 4242 4242 4242");
    form.set(Field::ExpiryDate, "12/28");
    form.set(Field::Cvv, "123");
    form.set(Field::CardholderName, "Demo User");
    form.set(Field::BillingAddress, "1 Main St");
    form.set(Field::City, "Portland");
    form.set(Field::ZipCode, "97201");
    form
  }

  #[tokio::test]
  async fn happy_path_reaches_success_with_selected_artist() {
    let processor = InstantProcessor::default();
    let mut flow = OnboardingFlow::default();
    assert_eq!(flow.state(), &OnboardingState::Discovery);

    flow.subscribe(&luna(), &processor).await.unwrap();
    assert_eq!(flow.state().name(), "checkout");
    assert_eq!(flow.quote().unwrap().total.to_string(), "$9.71");

    let receipt = flow.submit_payment(&card(), &processor).await.unwrap();
    assert_eq!(receipt.amount.to_string(), "$9.71");
    assert_eq!(flow.state().name(), "success");
    assert_eq!(
      flow.user_data().selected_artist.as_ref().map(|a| a.id.as_str()),
      Some("luna-echo")
    );

    let mut completed = None;
    flow.finish(|data| completed = Some(data.clone())).unwrap();
    assert_eq!(flow.state(), &OnboardingState::Complete);
    let data = completed.unwrap();
    assert_eq!(data.first_name, "Demo");
    assert_eq!(data.interests, ["music"]);
  }

  #[tokio::test]
  async fn invalid_card_stays_in_checkout() {
    let processor = InstantProcessor::default();
    let mut flow = OnboardingFlow::default();
    flow.subscribe(&luna(), &processor).await.unwrap();

    let mut form = card();
    form.card_number = "4242 4242 4242 424".into();
    let err = flow.submit_payment(&form, &processor).await.unwrap_err();

    match err {
      Error::Checkout(errors) => assert!(errors.contains(Field::CardNumber)),
      other => panic!("expected checkout errors, got {other:?}"),
    }
    assert_eq!(flow.state().name(), "checkout");
    assert_eq!(processor.charges.load(Ordering::SeqCst), 0);

    // Corrected form goes through.
    flow.submit_payment(&card(), &processor).await.unwrap();
    assert_eq!(flow.state().name(), "success");
  }

  #[tokio::test]
  async fn declined_charge_stays_in_checkout() {
    let mut flow = OnboardingFlow::default();
    flow.subscribe(&luna(), &DecliningProcessor).await.unwrap();
    let err = flow.submit_payment(&card(), &DecliningProcessor).await.unwrap_err();
    assert!(matches!(err, Error::Payment(_)));
    assert_eq!(flow.state().name(), "checkout");
  }

  #[tokio::test]
  async fn back_returns_to_discovery_only_from_checkout() {
    let processor = InstantProcessor::default();
    let mut flow = OnboardingFlow::default();
    assert!(matches!(
      flow.back(),
      Err(Error::InvalidTransition { state: "discovery", .. })
    ));

    flow.subscribe(&luna(), &processor).await.unwrap();
    flow.back().unwrap();
    assert_eq!(flow.state(), &OnboardingState::Discovery);
    assert!(flow.quote().is_none());
    // The earlier choice is remembered until another artist is picked.
    assert!(flow.user_data().selected_artist.is_some());
  }

  #[tokio::test]
  async fn out_of_order_actions_are_rejected() {
    let processor = InstantProcessor::default();
    let mut flow = OnboardingFlow::default();

    assert!(flow.submit_payment(&card(), &processor).await.is_err());
    assert!(flow.finish(|_| {}).is_err());

    flow.subscribe(&luna(), &processor).await.unwrap();
    assert!(flow.subscribe(&luna(), &processor).await.is_err());
    assert!(flow.finish(|_| {}).is_err());
  }

  #[test]
  fn patch_overwrites_only_given_fields() {
    let mut data = UserData::default();
    data.merge(UserDataPatch {
      first_name: Some("Jo".into()),
      ..UserDataPatch::default()
    });
    assert_eq!(data.first_name, "Jo");
    assert_eq!(data.last_name, "User");
    assert_eq!(data.email, "demo@example.com");
  }
}
