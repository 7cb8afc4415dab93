//! Core types and trait definitions for the OXGN artist/fan platform.
//!
//! This crate is deliberately free of HTTP and runtime dependencies. Storage
//! backends implement [`store::PlatformStore`]; everything else (derivations,
//! onboarding, login gates, dashboard state) is written against that trait or
//! against plain slices.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod artist;
pub mod billing;
pub mod checkout;
pub mod content;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod feed;
pub mod format;
pub mod invite;
pub mod ledger;
pub mod login;
pub mod message;
pub mod money;
pub mod onboarding;
pub mod query;
pub mod session;
pub mod store;
pub mod subscription;
pub mod user;

pub use error::{Error, Result};
pub use money::Money;
