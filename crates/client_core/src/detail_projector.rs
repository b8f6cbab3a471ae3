use std::sync::Arc;

use shared::domain::{CelestialObject, ObjectId};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::warn;

use crate::CatalogAccess;

/// Detail screen state. Deliberately a pair rather than a tagged union: the
/// previous object stays visible while `is_loading` is true, and a failed or
/// not-found lookup is indistinguishable from "nothing loaded yet".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailViewState {
    pub object: Option<CelestialObject>,
    pub is_loading: bool,
}

/// Owns [`DetailViewState`] for one object in focus at a time.
pub struct DetailProjector {
    access: Arc<dyn CatalogAccess>,
    state: watch::Sender<DetailViewState>,
}

impl DetailProjector {
    pub fn new(access: Arc<dyn CatalogAccess>) -> Self {
        let (state, _) = watch::channel(DetailViewState::default());
        Self { access, state }
    }

    pub fn subscribe_state(&self) -> watch::Receiver<DetailViewState> {
        self.state.subscribe()
    }

    pub fn state_stream(&self) -> WatchStream<DetailViewState> {
        WatchStream::new(self.state.subscribe())
    }

    /// Loads the object with the given id, replacing whatever was held
    /// before. `is_loading` drops back to false unconditionally; there is no
    /// error variant here, so a failed lookup yields an absent object.
    pub async fn load(&self, id: ObjectId) {
        self.state.send_modify(|state| state.is_loading = true);

        let object = match self.access.get_by_id(id).await {
            Ok(object) => object,
            Err(err) => {
                warn!(id = id.0, error = %err, "detail lookup failed");
                None
            }
        };

        self.state.send_replace(DetailViewState {
            object,
            is_loading: false,
        });
    }
}

#[cfg(test)]
#[path = "tests/detail_projector_tests.rs"]
mod tests;
