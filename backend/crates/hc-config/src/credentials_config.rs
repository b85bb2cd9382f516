use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_SECRET,
    DEFAULT_MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

/// Demonstration credentials accepted by sign-in.
///
/// These are not secrets in any meaningful sense: the site has no user
/// database and any e-mail/password pair that looks plausible signs in as a
/// sponsor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub admin_email: String,
    pub admin_secret: String,
    /// Shortest password accepted for a sponsor sign-in (in UTF-16 code units)
    pub min_password_length: usize,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            admin_secret: String::from(DEFAULT_ADMIN_SECRET),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl CredentialsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.admin_email.contains('@') {
            return Err(ConfigError::credentials(format!(
                "credentials.admin_email must contain '@', got '{}'",
                self.admin_email
            )));
        }

        if self.admin_secret.is_empty() {
            return Err(ConfigError::credentials(
                "credentials.admin_secret cannot be empty",
            ));
        }

        if self.min_password_length == 0 {
            return Err(ConfigError::credentials(
                "credentials.min_password_length must be at least 1",
            ));
        }

        Ok(())
    }
}
