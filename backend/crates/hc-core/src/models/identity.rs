use crate::Role;

use serde::{Deserialize, Serialize};

const ADMINISTRATOR_ID: &str = "1";
const ADMINISTRATOR_DISPLAY_NAME: &str = "Administrador";
const SPONSOR_ID: &str = "2";

/// The visitor currently using the application.
///
/// Synthesized from the submitted credentials; there is no user database
/// behind it. Serialized with camelCase keys so the persisted copy matches
/// what the site has always stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub display_name: String,
    /// Always `Some(true)` for sponsors. Nothing reads it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

impl Identity {
    pub fn administrator(email: impl Into<String>) -> Self {
        Self {
            id: ADMINISTRATOR_ID.to_string(),
            email: email.into(),
            role: Role::Administrator,
            display_name: ADMINISTRATOR_DISPLAY_NAME.to_string(),
            approved: None,
        }
    }

    /// Sponsor identity named after the local part of `email`.
    pub fn sponsor(email: impl Into<String>) -> Self {
        let email = email.into();
        let display_name = email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(email.as_str())
            .to_string();

        Self {
            id: SPONSOR_ID.to_string(),
            email,
            role: Role::Sponsor,
            display_name,
            approved: Some(true),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
