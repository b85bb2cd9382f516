pub mod access_guard;
pub mod credential_policy;
pub mod error;
pub mod registration;
pub mod session_settings;
pub mod session_store;
pub mod storage;

pub use access_guard::{AccessDecision, AccessGuard, HOME_PATH, SIGN_IN_PATH};
pub use credential_policy::CredentialPolicy;
pub use error::{Result, SessionError};
pub use registration::RegistrationRequest;
pub use session_settings::SessionSettings;
pub use session_store::SessionStore;
pub use storage::{
    SessionStorage, file_storage::FileStorage, memory_storage::MemoryStorage,
};

#[cfg(test)]
mod tests;
