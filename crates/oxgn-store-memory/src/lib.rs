//! In-memory backend for the OXGN platform store.
//!
//! Serves a [`Dataset`](oxgn_core::dataset::Dataset) held behind an `Arc`,
//! seeded by default with the demo catalogue. Login lookups and simulated
//! payments sleep for a configurable time so clients see realistic latency.

mod payments;
mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use payments::SimulatedPayments;
pub use seed::seed;
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
