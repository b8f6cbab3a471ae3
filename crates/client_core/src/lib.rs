use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use catalog::Catalog;
use futures::{future, stream, stream::BoxStream, StreamExt};
use shared::{
    domain::{Category, CelestialObject, ObjectId},
    error::RetrievalError,
};

mod detail_projector;
mod list_projector;

pub use detail_projector::{DetailProjector, DetailViewState};
pub use list_projector::{ListProjector, ListViewState};

/// Full-replacement snapshots of the catalog. Consumers must treat every
/// emission as the complete list, never as a delta.
pub type CatalogSnapshots = BoxStream<'static, Vec<CelestialObject>>;

/// Capability boundary between the catalog store and the view layer. The
/// in-memory implementation below only simulates latency, but the signatures
/// reserve failure so a network-backed store can replace it without touching
/// callers.
#[async_trait]
pub trait CatalogAccess: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CelestialObject>, RetrievalError>;

    async fn get_by_id(&self, id: ObjectId) -> Result<Option<CelestialObject>, RetrievalError>;

    async fn get_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<CelestialObject>, RetrievalError>;

    /// Lazy two-snapshot feed: an empty list immediately, then the full
    /// catalog once the list latency elapses. The stream ends after the
    /// second emission and is not restartable.
    fn observe_all(&self) -> CatalogSnapshots;
}

/// Simulated latency per access operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub lookup: Duration,
    pub filtered: Duration,
}

impl LatencyProfile {
    pub const ZERO: Self = Self {
        list: Duration::ZERO,
        lookup: Duration::ZERO,
        filtered: Duration::ZERO,
    };

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            list: self.list.mul_f64(factor),
            lookup: self.lookup.mul_f64(factor),
            filtered: self.filtered.mul_f64(factor),
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(1500),
            lookup: Duration::from_millis(800),
            filtered: Duration::from_millis(1000),
        }
    }
}

/// [`CatalogAccess`] over an injected, read-only [`Catalog`]. Every call
/// suspends for the configured latency and then delegates; no operation can
/// fail here.
pub struct InMemoryCatalogAccess {
    catalog: Arc<Catalog>,
    latency: LatencyProfile,
}

impl InMemoryCatalogAccess {
    pub fn new(catalog: Arc<Catalog>, latency: LatencyProfile) -> Self {
        Self { catalog, latency }
    }

    /// The shipped data set with production latency.
    pub fn seeded() -> Self {
        Self::new(Arc::new(Catalog::seeded()), LatencyProfile::default())
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }
}

#[async_trait]
impl CatalogAccess for InMemoryCatalogAccess {
    async fn get_all(&self) -> Result<Vec<CelestialObject>, RetrievalError> {
        tokio::time::sleep(self.latency.list).await;
        Ok(self.catalog.all().to_vec())
    }

    async fn get_by_id(&self, id: ObjectId) -> Result<Option<CelestialObject>, RetrievalError> {
        tokio::time::sleep(self.latency.lookup).await;
        Ok(self.catalog.by_id(id).cloned())
    }

    async fn get_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<CelestialObject>, RetrievalError> {
        tokio::time::sleep(self.latency.filtered).await;
        Ok(self.catalog.by_category(category))
    }

    fn observe_all(&self) -> CatalogSnapshots {
        let catalog = Arc::clone(&self.catalog);
        let delay = self.latency.list;
        let warm = stream::once(async move {
            tokio::time::sleep(delay).await;
            catalog.all().to_vec()
        });
        stream::once(future::ready(Vec::new())).chain(warm).boxed()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
