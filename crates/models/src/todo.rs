use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub const MAX_TITLE_LEN: usize = 300;

/// A single task. Identifiers are generated on creation and never change;
/// the wire format is camelCase to stay compatible with existing clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Build a fresh item from validated input, stamping both timestamps
    /// with the same instant.
    pub fn new(title: String, completed: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            completed,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Creation input: `completed` defaults to false when omitted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_title(&self.title)
    }
}

/// Partial update: absent fields are left untouched. An empty patch is
/// valid and only restamps `updated_at`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.is_empty() {
        return Err(ModelError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ModelError::Validation(format!(
            "title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}
