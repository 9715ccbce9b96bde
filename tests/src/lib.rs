//! Shared helpers for the ad service integration tests.

pub mod fixtures;
pub mod setup;
