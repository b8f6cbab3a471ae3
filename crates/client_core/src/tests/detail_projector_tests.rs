use super::*;

use async_trait::async_trait;
use catalog::Catalog;
use futures::{stream, StreamExt};
use shared::{domain::Category, error::RetrievalError};

use crate::{CatalogAccess, CatalogSnapshots, InMemoryCatalogAccess, LatencyProfile};

/// Access double with no healthy path at all.
struct UnavailableAccess;

#[async_trait]
impl CatalogAccess for UnavailableAccess {
    async fn get_all(&self) -> Result<Vec<CelestialObject>, RetrievalError> {
        Err(RetrievalError::failed("catalog backend unavailable"))
    }

    async fn get_by_id(&self, _id: ObjectId) -> Result<Option<CelestialObject>, RetrievalError> {
        Err(RetrievalError::failed("catalog backend unavailable"))
    }

    async fn get_by_category(
        &self,
        _category: Category,
    ) -> Result<Vec<CelestialObject>, RetrievalError> {
        Err(RetrievalError::failed("catalog backend unavailable"))
    }

    fn observe_all(&self) -> CatalogSnapshots {
        stream::empty().boxed()
    }
}

fn zero_latency_access() -> Arc<dyn CatalogAccess> {
    Arc::new(InMemoryCatalogAccess::new(
        Arc::new(Catalog::seeded()),
        LatencyProfile::ZERO,
    ))
}

#[tokio::test]
async fn load_yields_sirius_with_ancient_discovery_label() {
    let projector = DetailProjector::new(zero_latency_access());
    projector.load(ObjectId(5)).await;

    let state = projector.subscribe_state().borrow().clone();
    assert!(!state.is_loading);
    let sirius = state.object.expect("sirius");
    assert_eq!(sirius.name, "Sirius");
    assert_eq!(sirius.discovery_year, -10000);
    assert_eq!(sirius.discovery_label(), "Ancient Times");
}

// Known design limitation, preserved deliberately: a missing id settles on
// (is_loading = false, object = None) with no distinct error signal, which a
// consumer cannot tell apart from "nothing loaded yet".
#[tokio::test]
async fn missing_id_settles_on_absent_object_without_error() {
    let projector = DetailProjector::new(zero_latency_access());
    projector.load(ObjectId(9999)).await;

    let state = projector.subscribe_state().borrow().clone();
    assert_eq!(
        state,
        DetailViewState {
            object: None,
            is_loading: false,
        }
    );
}

// The asymmetry with the list projector is intentional: retrieval failure
// here also collapses to an absent object.
#[tokio::test]
async fn failed_lookup_is_indistinguishable_from_absent() {
    let projector = DetailProjector::new(Arc::new(UnavailableAccess));
    projector.load(ObjectId(1)).await;

    let state = projector.subscribe_state().borrow().clone();
    assert_eq!(state.object, None);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn reload_replaces_the_held_object_entirely() {
    let projector = DetailProjector::new(zero_latency_access());
    projector.load(ObjectId(1)).await;
    projector.load(ObjectId(2)).await;

    let state = projector.subscribe_state().borrow().clone();
    assert_eq!(state.object.expect("jupiter").name, "Jupiter");
}

// The pair shape allows a stale object to stay visible while a reload is in
// flight; pin that down rather than leaving it to chance.
#[tokio::test(start_paused = true)]
async fn previous_object_stays_visible_while_reloading() {
    let access: Arc<dyn CatalogAccess> = Arc::new(InMemoryCatalogAccess::seeded());
    let projector = Arc::new(DetailProjector::new(access));
    projector.load(ObjectId(1)).await;

    let mut state = projector.subscribe_state();
    let reload = tokio::spawn({
        let projector = Arc::clone(&projector);
        async move { projector.load(ObjectId(2)).await }
    });

    state.changed().await.expect("state channel");
    {
        let mid_flight = state.borrow();
        assert!(mid_flight.is_loading);
        assert_eq!(
            mid_flight.object.as_ref().map(|object| object.name.as_str()),
            Some("Mars")
        );
    }

    reload.await.expect("reload task");
    let final_state = projector.subscribe_state().borrow().clone();
    assert!(!final_state.is_loading);
    assert_eq!(final_state.object.expect("jupiter").name, "Jupiter");
}
