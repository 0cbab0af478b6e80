//! Contract verifier for the /mercado resource collection.
//!
//! Build request, send, assert: a [`MercadoClient`] issues one HTTP call per
//! contract operation, captures status, JSON body, content type, and elapsed
//! time in an [`ApiResponse`], and classifies transport failures as
//! [`crate::core::VerifyError`]. [`fire_batch`] covers the concurrent
//! rate-limit probes.

pub mod batch;
pub mod client;
pub mod fixtures;
pub mod response;

pub use batch::{fire_batch, BatchOutcome};
pub use client::MercadoClient;
pub use fixtures::MarketFixture;
pub use response::ApiResponse;
