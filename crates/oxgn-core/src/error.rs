//! Error types for `oxgn-core`.

use thiserror::Error;

use crate::checkout::FieldErrors;

#[derive(Debug, Error)]
pub enum Error {
  #[error("artist not found: {0}")]
  ArtistNotFound(String),

  #[error("artist {0} must have a positive subscription price")]
  NonPositivePrice(String),

  #[error("text post {0} must not carry media urls")]
  TextPostWithMedia(String),

  #[error("invalid amount: {0}")]
  InvalidAmount(String),

  #[error("cannot {action} during the {state} step")]
  InvalidTransition {
    state:  &'static str,
    action: &'static str,
  },

  #[error("checkout form has {} invalid field(s)", .0.len())]
  Checkout(FieldErrors),

  #[error("payment processor error: {0}")]
  Payment(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
