use crate::stores::seed;
use crate::{Child, ChildDraft, CoreError, Result as CoreErrorResult};

use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct CatalogState {
    children: Vec<Child>,
    /// Highest numeric id ever handed out
    last_id: u64,
}

/// In-memory catalog of children, shared across request handlers.
#[derive(Debug, Clone, Default)]
pub struct ChildCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl ChildCatalog {
    pub fn new(children: Vec<Child>) -> Self {
        let last_id = children
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            state: Arc::new(RwLock::new(CatalogState { children, last_id })),
        }
    }

    /// Catalog holding the programme's starting roster.
    pub fn seeded() -> Self {
        Self::new(seed::children())
    }

    pub async fn list(&self) -> Vec<Child> {
        self.state.read().await.children.clone()
    }

    /// Children still waiting for a sponsor.
    pub async fn available(&self) -> Vec<Child> {
        self.state
            .read()
            .await
            .children
            .iter()
            .filter(|c| !c.sponsored)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Child> {
        self.state
            .read()
            .await
            .children
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.children.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.children.is_empty()
    }

    /// Adds a new unsponsored child. Ids are numeric and never reused.
    pub async fn add(&self, draft: ChildDraft) -> CoreErrorResult<Child> {
        draft.validate()?;

        let mut state = self.state.write().await;
        state.last_id += 1;

        let child = Child {
            id: state.last_id.to_string(),
            name: draft.name.trim().to_string(),
            age: draft.age.unwrap_or_default(),
            description: draft.description.trim().to_string(),
            sponsored: false,
            sponsor_name: None,
            sponsorship_date: None,
        };
        state.children.push(child.clone());

        info!("Added child {} ({})", child.id, child.name);
        Ok(child)
    }

    /// Replaces name, age and description; sponsorship fields are kept.
    pub async fn update(&self, id: &str, draft: ChildDraft) -> CoreErrorResult<Child> {
        draft.validate()?;

        let mut state = self.state.write().await;
        let child = state
            .children
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::not_found("Child", id))?;

        child.name = draft.name.trim().to_string();
        child.age = draft.age.unwrap_or(child.age);
        child.description = draft.description.trim().to_string();

        info!("Updated child {id}");
        Ok(child.clone())
    }

    pub async fn remove(&self, id: &str) -> CoreErrorResult<Child> {
        let mut state = self.state.write().await;
        let index = state
            .children
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::not_found("Child", id))?;

        let removed = state.children.remove(index);
        info!("Removed child {id} from catalog");
        Ok(removed)
    }
}
