use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::contact::store::SubmissionStore;

/// Per-visitor context owning that visitor's submissions.
#[derive(Debug)]
pub struct SessionContext {
    id: Uuid,
    store: SubmissionStore,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            store: SubmissionStore::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SubmissionStore {
        &mut self.store
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps session ids to their contexts. Each context sits behind its own
/// mutex, which serializes submissions within a session for the whole
/// validate → record → notify sequence.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<SessionContext>>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let session = SessionContext::new();
        let id = session.id();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<SessionContext>>> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::Submission;

    #[tokio::test]
    async fn test_create_then_get() {
        let registry = SessionRegistry::new();
        let id = registry.create().await;
        let session = registry.get(id).await.expect("session exists");
        assert_eq!(session.lock().await.id(), id);
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let registry = SessionRegistry::new();
        assert!(registry.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_stores() {
        let registry = SessionRegistry::new();
        let a = registry.create().await;
        let b = registry.create().await;
        assert_ne!(a, b);
        assert_eq!(registry.len().await, 2);

        registry
            .get(a)
            .await
            .unwrap()
            .lock()
            .await
            .store_mut()
            .append(Submission::new("a@b.com", "1234567", ""));

        assert_eq!(registry.get(a).await.unwrap().lock().await.store().len(), 1);
        assert!(registry.get(b).await.unwrap().lock().await.store().list_all().is_empty());
    }
}
