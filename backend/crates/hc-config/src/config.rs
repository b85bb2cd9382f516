use crate::{
    ConfigError, ConfigErrorResult, CredentialsConfig, LatencyConfig, LoggingConfig,
    ServerConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub credentials: CredentialsConfig,
    pub latency: LatencyConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for HC_CONFIG_DIR env var, else use ./.hc/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply HC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Development convenience only; a missing .env is fine
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HC_CONFIG_DIR env var > ./.hc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("HC_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".hc"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.session.validate()?;
        self.credentials.validate()?;
        self.latency.validate()?;
        Ok(())
    }

    /// Absolute directory holding the persisted session.
    pub fn session_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.dir))
    }

    /// Absolute log file path, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs the admin secret).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  session: dir={}, key={}",
            self.session.dir, self.session.key
        );
        info!(
            "  credentials: admin={}, min_password_length={}",
            self.credentials.admin_email, self.credentials.min_password_length
        );
        info!(
            "  latency: sign_in={}ms, register={}ms, donation={}ms, volunteer={}ms, reset={}ms",
            self.latency.sign_in_ms,
            self.latency.register_ms,
            self.latency.donation_ms,
            self.latency.volunteer_ms,
            self.latency.password_reset_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HC_SERVER_PORT", &mut self.server.port);

        // Session
        Self::apply_env_string("HC_SESSION_DIR", &mut self.session.dir);
        Self::apply_env_string("HC_SESSION_KEY", &mut self.session.key);

        // Credentials
        Self::apply_env_string("HC_ADMIN_EMAIL", &mut self.credentials.admin_email);
        Self::apply_env_string("HC_ADMIN_SECRET", &mut self.credentials.admin_secret);
        Self::apply_env_parse(
            "HC_MIN_PASSWORD_LENGTH",
            &mut self.credentials.min_password_length,
        );

        // Latency
        Self::apply_env_parse("HC_LATENCY_SIGN_IN_MS", &mut self.latency.sign_in_ms);
        Self::apply_env_parse("HC_LATENCY_REGISTER_MS", &mut self.latency.register_ms);
        Self::apply_env_parse("HC_LATENCY_DONATION_MS", &mut self.latency.donation_ms);
        Self::apply_env_parse("HC_LATENCY_VOLUNTEER_MS", &mut self.latency.volunteer_ms);
        Self::apply_env_parse(
            "HC_LATENCY_PASSWORD_RESET_MS",
            &mut self.latency.password_reset_ms,
        );

        // Logging
        Self::apply_env_parse("HC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
