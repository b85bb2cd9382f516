use hc_config::CredentialsConfig;
use hc_core::Identity;

/// Decides which identity, if any, a pair of credentials signs in as.
///
/// Rules are checked in order:
/// 1. exact admin e-mail and admin secret: administrator
/// 2. e-mail containing `@` and a password of at least
///    `min_password_length` UTF-16 code units: sponsor
/// 3. anything else: rejected
///
/// Nothing is checked against a user database. Any plausible pair becomes a
/// sponsor, so this is a demonstration gate and not authentication.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    admin_email: String,
    admin_secret: String,
    min_password_length: usize,
}

impl CredentialPolicy {
    pub fn new(
        admin_email: impl Into<String>,
        admin_secret: impl Into<String>,
        min_password_length: usize,
    ) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_secret: admin_secret.into(),
            min_password_length,
        }
    }

    pub fn from_config(config: &CredentialsConfig) -> Self {
        Self::new(
            config.admin_email.clone(),
            config.admin_secret.clone(),
            config.min_password_length,
        )
    }

    pub fn evaluate(&self, email: &str, password: &str) -> Option<Identity> {
        if email == self.admin_email && password == self.admin_secret {
            return Some(Identity::administrator(email));
        }

        if email.contains('@') && password.encode_utf16().count() >= self.min_password_length {
            return Some(Identity::sponsor(email));
        }

        None
    }
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self::from_config(&CredentialsConfig::default())
    }
}
