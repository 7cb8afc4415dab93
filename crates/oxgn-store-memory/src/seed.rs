//! The demo catalogue: four artists, six posts, one fan with three
//! subscriptions, and the portal logins.

use oxgn_core::dataset::Dataset;

use crate::Result;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Parse the bundled demo dataset.
pub fn seed() -> Result<Dataset> { Ok(serde_json::from_str(SEED_JSON)?) }
