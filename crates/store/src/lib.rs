//! SQLite datastore for the ad service.

pub mod client;
pub mod config;
pub mod health;
pub mod schema;
pub mod session;

pub use client::*;
pub use config::*;
pub use session::Session;
