use crate::{CoreError, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A child in the sponsorship programme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub description: String,
    pub sponsored: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorship_date: Option<NaiveDate>,
}

/// Fields an administrator submits when adding or editing a child.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChildDraft {
    #[serde(default)]
    pub name: String,
    pub age: Option<u8>,
    #[serde(default)]
    pub description: String,
}

impl ChildDraft {
    /// Every field is required and the age must be positive.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "Todos los campos son requeridos"));
        }

        match self.age {
            None => {
                return Err(CoreError::validation("age", "Todos los campos son requeridos"));
            }
            Some(0) => {
                return Err(CoreError::validation("age", "age must be greater than 0"));
            }
            Some(_) => {}
        }

        if self.description.trim().is_empty() {
            return Err(CoreError::validation(
                "description",
                "Todos los campos son requeridos",
            ));
        }

        Ok(())
    }
}
