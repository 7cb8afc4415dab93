//! Error type for `oxgn-store-memory`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The dataset broke a record invariant.
  #[error("core error: {0}")]
  Core(#[from] oxgn_core::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("could not read dataset {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
