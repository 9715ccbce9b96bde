//! Field length limits for ad records.
//!
//! The `#[validate]` derive macro requires literal values in attributes,
//! so these bounds are duplicated on `AdPayload`. Keep both in sync when
//! modifying; `schema::tests::test_validate_literals_match_limits` fails
//! if they drift.

/// Minimum title length (chars).
pub const TITLE_MIN_LEN: u64 = 3;

/// Maximum title length (chars).
pub const TITLE_MAX_LEN: u64 = 100;

/// Minimum content length (chars).
pub const CONTENT_MIN_LEN: u64 = 10;

/// Minimum owner length (chars).
pub const OWNER_MIN_LEN: u64 = 3;
