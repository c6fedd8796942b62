//! Client side of the charging management REST API
//!
//! The console talks to the backend exclusively through the [`ChargingApi`]
//! trait so controllers can be driven by fakes in tests.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::{ChargingApi, HttpChargingApi};
pub use endpoints::Endpoint;
pub use error::ApiError;

#[cfg(test)]
pub use client::MockChargingApi;
