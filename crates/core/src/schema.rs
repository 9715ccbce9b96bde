//! Validation schema for ad payloads.
//!
//! Create and update accept the same shape: `title`, `content` and `owner`
//! are all required. Unknown fields are ignored. An optional positive
//! integer `id` may accompany a create.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::ad::AdFields;
use crate::error::{Error, FieldError, Result};

/// A validated ad payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AdPayload {
    pub id: Option<i64>,
    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub content: String,
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub owner: String,
}

impl AdPayload {
    /// Split into the explicit id (if any) and the mutable fields.
    pub fn into_parts(self) -> (Option<i64>, AdFields) {
        (
            self.id,
            AdFields {
                title: self.title,
                content: self.content,
                owner: self.owner,
            },
        )
    }
}

/// Validate an untyped create payload against the ad schema.
///
/// Every failing field is reported, sorted by field name.
pub fn validate_ad(value: &Value) -> Result<AdPayload> {
    validate(value, true)
}

/// Validate an update payload. Ids are immutable, so a body `id` is
/// ignored rather than checked.
pub fn validate_ad_fields(value: &Value) -> Result<AdFields> {
    validate(value, false).map(|payload| payload.into_parts().1)
}

fn validate(value: &Value, accept_id: bool) -> Result<AdPayload> {
    let Some(obj) = value.as_object() else {
        return Err(Error::validation(vec![FieldError::new(
            "",
            "expected a JSON object",
        )]));
    };

    let mut errors = Vec::new();

    let title = required_string(obj, "title", &mut errors);
    let content = required_string(obj, "content", &mut errors);
    let owner = required_string(obj, "owner", &mut errors);
    let id = if accept_id {
        optional_id(obj, &mut errors)
    } else {
        None
    };

    let payload = AdPayload {
        id,
        title: title.unwrap_or_default(),
        content: content.unwrap_or_default(),
        owner: owner.unwrap_or_default(),
    };

    if let Err(validation) = payload.validate() {
        for (field, field_errors) in validation.field_errors() {
            let field = field.to_string();
            // Missing/mistyped fields already have a more precise error
            if errors.iter().any(|e: &FieldError| e.field == field) {
                continue;
            }
            for err in field_errors {
                let reason = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                errors.push(FieldError::new(field.clone(), reason));
            }
        }
    }

    if errors.is_empty() {
        Ok(payload)
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(Error::validation(errors))
    }
}

fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "field required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

fn optional_id(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<i64> {
    match obj.get("id") {
        None | Some(Value::Null) => None,
        Some(v) => match v.as_i64() {
            Some(id) if id > 0 => Some(id),
            _ => {
                errors.push(FieldError::new("id", "must be a positive integer"));
                None
            }
        },
    }
}
