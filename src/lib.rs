//! Charging Console - administration front end for a prepaid charging server
//!
//! This crate provides the view-models (user list, user detail, notification
//! banner, pagination, confirmation dialogs) and the REST client used to
//! manage subscriber balances, plus the terminal shell that drives them.

pub mod api;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod notify;
pub mod routing;
pub mod types;
pub mod utils;
pub mod view;

// Re-export commonly used types and traits
pub use error::{ConsoleError, Result};
pub use types::*;

// Re-export key components
pub use api::{ChargingApi, HttpChargingApi};
pub use controller::{UserDetailController, UsersListController};
pub use notify::FlashService;
pub use routing::Route;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
