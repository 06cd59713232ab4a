//! In-memory registry of live portal sessions.
//!
//! A session is the server-side half of one browser tab. It is dropped when
//! the tab ends it, which corresponds to a page reload, or when it has been
//! idle for longer than the configured TTL. Only the locale preference
//! outlives it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Portal;
use crate::errors::AppError;

pub struct PortalSession {
    pub id: Uuid,
    /// Key of the stored locale preference, if the client supplied one.
    pub client_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every access through [`SessionStore::with_session`].
    last_active: Instant,
    pub portal: Portal,
}

impl PortalSession {
    pub fn new(client_id: Option<String>, portal: Portal) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            created_at: Utc::now(),
            last_active: Instant::now(),
            portal,
        }
    }
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, PortalSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: PortalSession) -> Uuid {
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        id
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| session_not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Run `f` against a session under the write lock.
    ///
    /// Keep `f` synchronous; simulated latency must be awaited outside it.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut PortalSession) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.last_active = Instant::now();
        f(session)
    }

    /// Drop sessions untouched for at least `max_idle`. Returns how many went.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_active.elapsed() < max_idle);
        before - sessions.len()
    }

    /// Sweep idle sessions in the background for the life of the process.
    pub fn spawn_expiry(self: &Arc<Self>, ttl: Duration) {
        let me = Arc::clone(self);
        let period = (ttl / 2).clamp(Duration::from_millis(10), Duration::from_secs(60));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let evicted = me.evict_idle(ttl).await;
                if evicted > 0 {
                    tracing::info!(evicted, "Expired idle portal sessions");
                }
            }
        });
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::Step;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = SessionStore::new();
        let id = store
            .insert(PortalSession::new(None, Portal::default()))
            .await;
        assert_eq!(store.len().await, 1);

        let step = store
            .with_session(id, |session| Ok(session.portal.step()))
            .await
            .unwrap();
        assert_eq!(step, Step::Login);

        store.remove(id).await.unwrap();
        assert!(matches!(
            store.with_session(id, |_| Ok(())).await,
            Err(AppError::NotFound(_))
        ));
        assert!(store.remove(id).await.is_err());
    }

    #[tokio::test]
    async fn test_evict_idle_keeps_recently_used_sessions() {
        let store = SessionStore::new();
        let active = store
            .insert(PortalSession::new(None, Portal::default()))
            .await;
        let idle = store
            .insert(PortalSession::new(None, Portal::default()))
            .await;

        tokio::time::sleep(Duration::from_millis(80)).await;
        store.with_session(active, |_| Ok(())).await.unwrap();

        assert_eq!(store.evict_idle(Duration::from_millis(50)).await, 1);
        assert_eq!(store.len().await, 1);
        assert!(store.with_session(active, |_| Ok(())).await.is_ok());
        assert!(store.with_session(idle, |_| Ok(())).await.is_err());

        assert_eq!(store.evict_idle(Duration::from_secs(60)).await, 0);
    }

    #[tokio::test]
    async fn test_background_expiry() {
        let store = Arc::new(SessionStore::new());
        store
            .insert(PortalSession::new(None, Portal::default()))
            .await;

        store.spawn_expiry(Duration::from_millis(40));
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(store.len().await, 0);
    }
}
