//! Core types, validation schema, and errors for the ad service.

pub mod ad;
pub mod error;
pub mod limits;
pub mod schema;

pub use ad::*;
pub use error::{Error, FieldError, Result};
pub use schema::{validate_ad, validate_ad_fields, AdPayload};
