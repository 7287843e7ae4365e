//! In-memory purchase request store.

use crate::{RequestIdSequence, Result as StoreResult, StoreError};

use pd_core::{
    NewPurchaseRequest, Page, PurchaseRequest, RequestQuery,
    sample_data::{self, REQUEST_ID_OFFSET},
};

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Ordered collection of purchase requests shared by all handlers.
///
/// Cloning yields another handle to the same records. Reads share the lock;
/// every mutation (including id allocation) runs under the write lock.
#[derive(Clone)]
pub struct RequestStore {
    inner: Arc<RwLock<StoreInner>>,
}

struct StoreInner {
    /// Insertion order is the listing order
    records: Vec<PurchaseRequest>,
    ids: RequestIdSequence,
}

impl StoreInner {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl RequestStore {
    pub fn new(seed: Vec<PurchaseRequest>, id_offset: u64) -> Self {
        let ids = RequestIdSequence::new(seed.len(), id_offset);
        Self {
            inner: Arc::new(RwLock::new(StoreInner { records: seed, ids })),
        }
    }

    /// Store pre-loaded with the demo request set
    pub fn with_sample_data() -> Self {
        Self::new(sample_data::seed_requests(), REQUEST_ID_OFFSET)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Filter and paginate
    pub async fn list(&self, query: &RequestQuery) -> Page<PurchaseRequest> {
        let inner = self.inner.read().await;
        let page = query.apply(&inner.records);
        debug!(
            "Listed requests: {} matched, page {}/{}",
            page.meta.total, page.meta.page, page.meta.pages
        );
        page
    }

    /// First `count` records in insertion order
    pub async fn recent(&self, count: usize) -> Vec<PurchaseRequest> {
        let inner = self.inner.read().await;
        inner.records.iter().take(count).cloned().collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<PurchaseRequest> {
        let inner = self.inner.read().await;
        let found = inner.records.iter().find(|r| r.id == id).cloned();
        if found.is_none() {
            debug!("Request {} not found", id);
        }
        found
    }

    /// Create a request dated today (local time).
    pub async fn create(&self, payload: NewPurchaseRequest) -> StoreResult<PurchaseRequest> {
        self.create_on(payload, Local::now().date_naive()).await
    }

    /// Create a request dated `today`. The id year follows `today` too.
    pub async fn create_on(
        &self,
        payload: NewPurchaseRequest,
        today: NaiveDate,
    ) -> StoreResult<PurchaseRequest> {
        let mut inner = self.inner.write().await;
        let StoreInner { records, ids } = &mut *inner;

        let request = payload.into_purchase_request(
            || ids.issue(today, |candidate| records.iter().any(|r| r.id == candidate)),
            today.format("%Y-%m-%d").to_string(),
        )?;

        records.push(request.clone());
        info!("Created request {} ({})", request.id, request.title);

        Ok(request)
    }

    /// Overwrite the existing fields named in `patch`.
    pub async fn update(
        &self,
        id: &str,
        patch: &Map<String, Value>,
    ) -> StoreResult<PurchaseRequest> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id).ok_or_else(|| StoreError::not_found(id))?;

        let request = &mut inner.records[index];
        let applied = request.apply_patch(patch)?;
        info!("Updated request {} fields {:?}", id, applied);

        Ok(request.clone())
    }

    /// Remove a request, keeping the order of the others. Returns the removed record.
    pub async fn delete(&self, id: &str) -> StoreResult<PurchaseRequest> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id).ok_or_else(|| StoreError::not_found(id))?;

        let removed = inner.records.remove(index);
        info!("Deleted request {}", removed.id);

        Ok(removed)
    }
}

impl Default for RequestStore {
    fn default() -> Self {
        Self::with_sample_data()
    }
}
