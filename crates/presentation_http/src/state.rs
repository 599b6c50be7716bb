//! Application state shared across handlers

use std::{
    collections::HashMap,
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use application::{
    PageConfig, PageContext,
    ports::{PlaceSuggestionPort, RoutingPort},
};
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Live page sessions
    pub sessions: Arc<SessionRegistry>,
    /// Directions provider
    pub routing: Arc<dyn RoutingPort>,
    /// Place suggestion provider
    pub places: Arc<dyn PlaceSuggestionPort>,
    /// Initial view for new pages
    pub page: Arc<PageConfig>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions.len())
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state with an empty session registry
    pub fn new(
        routing: Arc<dyn RoutingPort>,
        places: Arc<dyn PlaceSuggestionPort>,
        page: PageConfig,
    ) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::default()),
            routing,
            places,
            page: Arc::new(page),
        }
    }

    /// Initialize a new page and register it
    pub fn open_session(&self) -> (Uuid, Arc<PageContext>) {
        let page = Arc::new(PageContext::initialize(
            &self.page,
            Arc::clone(&self.routing),
            Arc::clone(&self.places),
        ));
        let id = self.sessions.insert(Arc::clone(&page));
        (id, page)
    }
}

struct SessionEntry {
    page: Arc<PageContext>,
    last_seen: Instant,
}

/// Page contexts by session id
///
/// Every lookup refreshes the session's last-seen time; sessions left idle
/// are removed by [`SessionRegistry::expire_idle`].
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.len())
            .finish()
    }
}

impl SessionRegistry {
    /// Register `page` under a fresh id
    pub fn insert(&self, page: Arc<PageContext>) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().insert(
            id,
            SessionEntry {
                page,
                last_seen: Instant::now(),
            },
        );
        info!(session = %id, "Session opened");
        id
    }

    /// Look up a session, marking it as active
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<Arc<PageContext>> {
        let mut sessions = self.sessions.write();
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(Arc::clone(&entry.page))
    }

    /// Unregister a page and tear it down
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().remove(id);
        match removed {
            Some(entry) => {
                entry.page.teardown();
                info!(session = %id, "Session closed");
                true
            },
            None => false,
        }
    }

    /// Tear down every session not looked up within `max_idle`
    ///
    /// Returns the number of sessions removed.
    pub fn expire_idle(&self, max_idle: Duration) -> usize {
        let expired: Vec<(Uuid, SessionEntry)> = {
            let mut sessions = self.sessions.write();
            let ids: Vec<Uuid> = sessions
                .iter()
                .filter(|(_, entry)| entry.last_seen.elapsed() >= max_idle)
                .map(|(id, _)| *id)
                .collect();
            ids.into_iter()
                .filter_map(|id| sessions.remove(&id).map(|entry| (id, entry)))
                .collect()
        };

        for (id, entry) in &expired {
            entry.page.teardown();
            info!(session = %id, "Session expired");
        }
        expired.len()
    }

    /// Tear down every session
    ///
    /// Dropping the pages closes their event streams. Returns the number of
    /// sessions removed.
    pub fn clear(&self) -> usize {
        let drained: Vec<SessionEntry> = self.sessions.write().drain().map(|(_, e)| e).collect();
        for entry in &drained {
            entry.page.teardown();
        }
        drained.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
