mod config;
mod credentials_config;
mod error;
mod latency_config;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use credentials_config::CredentialsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use latency_config::LatencyConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_SESSION_DIR: &str = "session";
const DEFAULT_SESSION_KEY: &str = "huahuacuna_user";

const DEFAULT_ADMIN_EMAIL: &str = "admin@huahuacuna.org";
const DEFAULT_ADMIN_SECRET: &str = "admin123";
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

const DEFAULT_SIGN_IN_LATENCY_MS: u64 = 500;
const DEFAULT_REGISTER_LATENCY_MS: u64 = 800;
const DEFAULT_DONATION_LATENCY_MS: u64 = 800;
const DEFAULT_VOLUNTEER_LATENCY_MS: u64 = 800;
const DEFAULT_PASSWORD_RESET_LATENCY_MS: u64 = 1000;
const MAX_LATENCY_MS: u64 = 30_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
