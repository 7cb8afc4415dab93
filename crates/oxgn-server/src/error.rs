//! Error type for `oxgn-server`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid CORS origin {0:?}")]
  InvalidOrigin(String),

  #[error("store error: {0}")]
  Store(#[from] oxgn_store_memory::Error),

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
