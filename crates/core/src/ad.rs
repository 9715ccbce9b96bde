//! Ad entity and its JSON projections.

use serde::{Deserialize, Serialize};

/// Message returned when a referenced ad does not exist.
pub const NOT_FOUND_MESSAGE: &str = "ad not found";

/// Message returned when an insert collides with an existing id.
pub const CONFLICT_MESSAGE: &str = "ad already exists";

/// A persisted advertisement record.
///
/// Serializes as the full view: `{id, title, content, owner}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub owner: String,
}

/// Id-only projection returned from create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdId {
    pub id: i64,
}

/// An ad that has not been inserted yet.
///
/// `id` is `None` when the datastore should assign one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub owner: String,
}

impl Ad {
    pub fn id_view(&self) -> AdId {
        AdId { id: self.id }
    }

    /// Overwrite every mutable field. `id` is left untouched.
    pub fn apply(&mut self, fields: AdFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.owner = fields.owner;
    }
}

/// The mutable fields of an ad, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdFields {
    pub title: String,
    pub content: String,
    pub owner: String,
}

impl AdFields {
    pub fn into_new_ad(self, id: Option<i64>) -> NewAd {
        NewAd {
            id,
            title: self.title,
            content: self.content,
            owner: self.owner,
        }
    }
}
