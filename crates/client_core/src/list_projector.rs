use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use shared::domain::{Category, CelestialObject};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

use crate::CatalogAccess;

/// List screen state. Exactly one variant is active at a time; consumers
/// match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum ListViewState {
    Loading,
    Success(Vec<CelestialObject>),
    Error(String),
}

impl ListViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Owns [`ListViewState`] plus the selected category filter and mediates
/// between shell intents and the access layer. State is published through
/// watch channels so any rendering layer can subscribe or poll.
pub struct ListProjector {
    access: Arc<dyn CatalogAccess>,
    state: watch::Sender<ListViewState>,
    filter: watch::Sender<Option<Category>>,
    // Monotonic reload ticket; a completed fetch publishes only while its
    // ticket is still the latest issued.
    requests: AtomicU64,
}

impl ListProjector {
    /// Starts in `Loading` without fetching; callers drive `reload`
    /// themselves. Prefer [`ListProjector::spawn`] in shells.
    pub fn new(access: Arc<dyn CatalogAccess>) -> Self {
        let (state, _) = watch::channel(ListViewState::Loading);
        let (filter, _) = watch::channel(None);
        Self {
            access,
            state,
            filter,
            requests: AtomicU64::new(0),
        }
    }

    /// Construction with the eager first load: enters `Loading` and spawns
    /// the initial fetch immediately. Requires a tokio runtime.
    pub fn spawn(access: Arc<dyn CatalogAccess>) -> Arc<Self> {
        let projector = Arc::new(Self::new(access));
        let eager = Arc::clone(&projector);
        tokio::spawn(async move { eager.reload().await });
        projector
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ListViewState> {
        self.state.subscribe()
    }

    /// The state as a stream, for shells that consume reactively rather
    /// than polling a watch receiver.
    pub fn state_stream(&self) -> WatchStream<ListViewState> {
        WatchStream::new(self.state.subscribe())
    }

    pub fn subscribe_filter(&self) -> watch::Receiver<Option<Category>> {
        self.filter.subscribe()
    }

    pub fn filter_stream(&self) -> WatchStream<Option<Category>> {
        WatchStream::new(self.filter.subscribe())
    }

    pub fn current_filter(&self) -> Option<Category> {
        *self.filter.borrow()
    }

    /// Restarts the load for the current filter. Overlapping reloads are
    /// resolved last-issued-wins: a slower, earlier reload that completes
    /// after a newer one discards its result instead of publishing.
    pub async fn reload(&self) {
        let ticket = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = *self.filter.borrow();
        self.state.send_replace(ListViewState::Loading);
        debug!(ticket, ?filter, "list reload started");

        let outcome = match filter {
            None => self.access.get_all().await,
            Some(category) => self.access.get_by_category(category).await,
        };

        if self.requests.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "discarding stale reload result");
            return;
        }

        let next = match outcome {
            Ok(objects) => ListViewState::Success(objects),
            Err(err) => {
                warn!(ticket, error = %err, "list reload failed");
                ListViewState::Error(err.message().to_string())
            }
        };
        self.state.send_replace(next);
    }

    /// Stores the new filter (`None` clears it) and restarts the load.
    pub async fn set_filter(&self, category: Option<Category>) {
        self.filter.send_replace(category);
        self.reload().await;
    }
}

#[cfg(test)]
#[path = "tests/list_projector_tests.rs"]
mod tests;
