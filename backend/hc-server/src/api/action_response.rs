use hc_core::{Identity, Notice};

use serde::Serialize;

/// Result of a form submission: the notices to show and where to go next.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse<T: Serialize = ()> {
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    /// The record the action created or changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
}

impl ActionResponse {
    /// No notices at all.
    pub fn silent() -> Self {
        Self::notify(Vec::<Notice>::new())
    }

    pub fn notify(notices: impl IntoIterator<Item = Notice>) -> Self {
        Self {
            notices: notices.into_iter().collect(),
            redirect: None,
            identity: None,
            record: None,
        }
    }

    pub fn with_record<T: Serialize>(self, record: T) -> ActionResponse<T> {
        ActionResponse {
            notices: self.notices,
            redirect: self.redirect,
            identity: self.identity,
            record: Some(record),
        }
    }
}

impl<T: Serialize> ActionResponse<T> {
    pub fn redirect_to(mut self, path: &str) -> Self {
        self.redirect = Some(path.to_string());
        self
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }
}
