use crate::stores::seed;
use crate::{Application, ApplicationStatus, CoreError, Result as CoreErrorResult};

use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

/// Sponsor applications awaiting review.
#[derive(Debug, Clone, Default)]
pub struct ApplicationBook {
    applications: Arc<RwLock<Vec<Application>>>,
}

impl ApplicationBook {
    pub fn new(applications: Vec<Application>) -> Self {
        Self {
            applications: Arc::new(RwLock::new(applications)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::applications())
    }

    pub async fn list(&self) -> Vec<Application> {
        self.applications.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Application> {
        self.applications
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub async fn pending_count(&self) -> usize {
        self.applications
            .read()
            .await
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count()
    }

    pub async fn approve(&self, id: &str) -> CoreErrorResult<Application> {
        self.set_status(id, ApplicationStatus::Approved).await
    }

    pub async fn reject(&self, id: &str) -> CoreErrorResult<Application> {
        self.set_status(id, ApplicationStatus::Rejected).await
    }

    /// Reviews may be revised: any status can move to any other.
    async fn set_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> CoreErrorResult<Application> {
        let mut applications = self.applications.write().await;
        let application = applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found("Application", id))?;

        application.status = status;
        info!("Application {id} marked {status}");
        Ok(application.clone())
    }
}
