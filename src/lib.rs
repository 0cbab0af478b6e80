//! Contract verification toolkit for the mercado market-registry API.
//!
//! The crate has two halves: the [`verifier`] library the black-box suites
//! are written against, and a reference actix-web implementation of the
//! `/mercado` contract ([`modules`]) the suites run against when no remote
//! target is configured.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod verifier;

// Re-export commonly used types
pub use modules::markets;
pub use verifier::{fire_batch, ApiResponse, BatchOutcome, MarketFixture, MercadoClient};
