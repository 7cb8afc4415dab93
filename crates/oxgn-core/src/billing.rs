//! The seam between the onboarding flow and whatever takes the money.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Money, artist::ArtistSnapshot, checkout::Quote};

/// A request to charge the fan for the first month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Charge {
  pub artist_id:  String,
  pub email:      String,
  pub card_last4: String,
  pub quote:      Quote,
}

/// Proof of a completed charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
  pub id:         Uuid,
  pub artist_id:  String,
  pub amount:     Money,
  pub charged_at: DateTime<Utc>,
}

impl Receipt {
  pub fn new(charge: &Charge, charged_at: DateTime<Utc>) -> Self {
    Self {
      id: Uuid::new_v4(),
      artist_id: charge.artist_id.clone(),
      amount: charge.quote.total,
      charged_at,
    }
  }
}

/// Abstraction over a payment provider.
pub trait PaymentProcessor: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Reserve a subscription to `artist` before the fan enters card details.
  fn confirm_subscription<'a>(
    &'a self,
    artist: &'a ArtistSnapshot,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn charge<'a>(
    &'a self,
    charge: &'a Charge,
  ) -> impl Future<Output = Result<Receipt, Self::Error>> + Send + 'a;
}
