use crate::{
    RegistrationRequest, Result as SessionResult, SessionError, SessionSettings, SessionStorage,
};

use std::sync::Arc;

use hc_core::Identity;
use log::{debug, info, warn};
use tokio::sync::RwLock;

/// The one session of this process.
///
/// Holds at most one identity in memory and mirrors it into durable storage
/// under the configured key. Every mutation writes storage first and only
/// then updates memory, so a failed write leaves the session as it was.
///
/// The store never navigates; callers map the returned identity's role to a
/// landing path themselves.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    settings: SessionSettings,
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    /// Hydrate the session from storage.
    ///
    /// A stored value that does not parse is backed up and ignored; I/O
    /// errors while reading propagate.
    pub fn open(storage: Arc<dyn SessionStorage>, settings: SessionSettings) -> SessionResult<Self> {
        let current = match storage.load(&settings.key)? {
            None => None,
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!(
                        "Restored session for {} ({})",
                        identity.email, identity.role
                    );
                    Some(identity)
                }
                Err(e) => {
                    warn!("Stored session under '{}' is corrupted: {e}", settings.key);
                    storage.quarantine(&settings.key)?;
                    None
                }
            },
        };

        Ok(Self {
            storage,
            settings,
            current: RwLock::new(current),
        })
    }

    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Wait the sign-in latency, then apply the credential policy.
    ///
    /// On rejection neither memory nor storage is touched.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<Identity> {
        tokio::time::sleep(self.settings.sign_in_latency).await;

        let Some(identity) = self.settings.policy.evaluate(email, password) else {
            warn!("Sign-in rejected for '{email}'");
            return Err(SessionError::invalid_credentials());
        };

        let serialized = serde_json::to_string(&identity)?;

        let mut current = self.current.write().await;
        self.storage.save(&self.settings.key, &serialized)?;
        *current = Some(identity.clone());

        info!("Signed in {} as {}", identity.email, identity.role);
        Ok(identity)
    }

    /// Clear the session. Signing out with nobody signed in does nothing.
    pub async fn sign_out(&self) -> SessionResult<()> {
        let mut current = self.current.write().await;
        self.storage.remove(&self.settings.key)?;

        match current.take() {
            Some(identity) => info!("Signed out {}", identity.email),
            None => debug!("Sign-out with no active session"),
        }
        Ok(())
    }

    /// Accepts a sponsor application. Nothing is stored or sent anywhere yet.
    pub async fn register(&self, request: &RegistrationRequest) {
        tokio::time::sleep(self.settings.register_latency).await;
        info!("Received sponsor application from '{}'", request.email);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.settings.key)
            .finish_non_exhaustive()
    }
}
