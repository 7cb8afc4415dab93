//! Recurring-payment relationships between fans and artists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionStatus {
  Active,
  Cancelled,
  PastDue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
  pub id:                   String,
  pub fan_id:               String,
  pub artist_id:            String,
  pub artist_name:          String,
  pub status:               SubscriptionStatus,
  pub amount:               Money,
  pub started_at:           DateTime<Utc>,
  pub next_billing_date:    DateTime<Utc>,
  /// Set when the fan asked to stop renewing; access lasts until
  /// `next_billing_date`.
  pub cancel_at_period_end: bool,
}

impl Subscription {
  pub fn is_active(&self) -> bool {
    self.status == SubscriptionStatus::Active
  }

  /// The label a fan sees next to the subscription.
  pub fn badge(&self) -> BillingBadge {
    match (self.status, self.cancel_at_period_end) {
      (SubscriptionStatus::Active, false) => BillingBadge::Active,
      (SubscriptionStatus::Active, true) => BillingBadge::Cancelling,
      (SubscriptionStatus::PastDue, _) => BillingBadge::PastDue,
      (SubscriptionStatus::Cancelled, _) => BillingBadge::Inactive,
    }
  }
}

/// Fan-facing billing state, derived from status and the cancel flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum BillingBadge {
  Active,
  Cancelling,
  #[strum(serialize = "Past Due")]
  PastDue,
  Inactive,
}
