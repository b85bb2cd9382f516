use hc_core::Identity;

use serde::Serialize;

/// Frame a view is rendered inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Chrome {
    /// Site header and footer
    Public,
    /// Administrator sidebar
    Admin,
    /// Sponsor sidebar
    Sponsor,
}

/// View model returned for every page.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse<T: Serialize = ()> {
    pub chrome: Chrome,
    pub view: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

impl ViewResponse {
    /// A view with nothing beyond its chrome.
    pub fn page(chrome: Chrome, view: &'static str, identity: Option<Identity>) -> Self {
        Self {
            chrome,
            view,
            data: None,
            identity,
        }
    }
}

impl<T: Serialize> ViewResponse<T> {
    pub fn with_data(
        chrome: Chrome,
        view: &'static str,
        identity: Option<Identity>,
        data: T,
    ) -> Self {
        Self {
            chrome,
            view,
            data: Some(data),
            identity,
        }
    }
}
