//! A payment processor that always succeeds after a pause.

use std::{convert::Infallible, time::Duration};

use tracing::info;

use oxgn_core::{
  artist::ArtistSnapshot,
  billing::{Charge, PaymentProcessor, Receipt},
};

/// Stand-in for a real payment provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPayments {
  /// Pause before a discovery subscribe is confirmed.
  pub confirm_latency: Duration,
  /// Pause before a checkout charge clears.
  pub charge_latency:  Duration,
}

impl SimulatedPayments {
  pub fn new(confirm_latency: Duration, charge_latency: Duration) -> Self {
    Self { confirm_latency, charge_latency }
  }
}

async fn pause(latency: Duration) {
  if !latency.is_zero() {
    tokio::time::sleep(latency).await;
  }
}

impl PaymentProcessor for SimulatedPayments {
  type Error = Infallible;

  async fn confirm_subscription(&self, artist: &ArtistSnapshot) -> Result<(), Infallible> {
    pause(self.confirm_latency).await;
    info!(artist_id = %artist.id, "subscription confirmed");
    Ok(())
  }

  async fn charge(&self, charge: &Charge) -> Result<Receipt, Infallible> {
    pause(self.charge_latency).await;
    let receipt = Receipt::new(charge, chrono::Utc::now());
    info!(
      artist_id = %charge.artist_id,
      amount = %receipt.amount,
      card = %charge.card_last4,
      "charge cleared"
    );
    Ok(receipt)
  }
}
