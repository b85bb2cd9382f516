use serde::Deserialize;

/// "Become a sponsor" application as submitted from the registration form.
///
/// Only the terms checkbox is checked before the request reaches the
/// session store; every other field is carried through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub document_type: String,
    pub document: String,
    pub birth_date: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub company: String,
    pub experience: String,
    pub reference: String,
    pub motivation: String,
    pub accept_terms: bool,
}

impl RegistrationRequest {
    pub fn accepts_terms(&self) -> bool {
        self.accept_terms
    }
}
