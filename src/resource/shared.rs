use std::sync::{Arc, RwLock};

use crate::resource::{
    error::ResourceError,
    pool::Resource,
    types::{ConsumptionReceipt, ResourceId, UsageEvent, UsageSummary},
};

/// Cheap-clone handle to a pool shared by several consumers. Clones share
/// one `Arc`, so a draw through any handle is visible through all of them.
/// The write lock covers the whole check-then-subtract sequence, which
/// keeps the non-negative invariant under concurrent callers.
#[derive(Debug, Clone)]
pub struct SharedResource {
    id: ResourceId,
    inner: Arc<RwLock<Resource>>,
}

impl SharedResource {
    pub fn new(id: impl Into<ResourceId>, resource: Resource) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(RwLock::new(resource)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reference identity: true only for handles to the same pool.
    pub fn same(&self, other: &SharedResource) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn name(&self) -> &'static str {
        self.inner.read().expect("lock poisoned").name()
    }

    pub fn total_available(&self) -> f64 {
        self.inner.read().expect("lock poisoned").total_available()
    }

    pub fn consume(&self, amount: f64) -> Result<ConsumptionReceipt, ResourceError> {
        self.inner
            .write()
            .expect("lock poisoned")
            .update_availability(amount)
    }

    pub fn report_usage(&self) -> UsageSummary {
        self.inner.read().expect("lock poisoned").report_usage()
    }

    pub fn usage_log(&self) -> Vec<UsageEvent> {
        self.inner.read().expect("lock poisoned").usage_log().to_vec()
    }
}
