use std::collections::BTreeMap;

use crate::{
    resource::{Resource, ResourceId, SharedResource, UsageSummary},
    session::error::SessionError,
};

/// In-memory arena mapping resource ids to shared handles. One id maps to
/// exactly one `Arc`, so id equality and reference identity coincide for
/// registered pools.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    by_id: BTreeMap<ResourceId, SharedResource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: impl Into<ResourceId>,
        resource: Resource,
    ) -> Result<SharedResource, SessionError> {
        let id = id.into();
        if self.by_id.contains_key(&id) {
            return Err(SessionError::ResourceIdConflict(id));
        }

        let handle = SharedResource::new(id.clone(), resource);
        self.by_id.insert(id, handle.clone());
        Ok(handle)
    }

    pub fn get(&self, id: &str) -> Option<SharedResource> {
        self.by_id.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = &SharedResource> {
        self.by_id.values()
    }

    pub fn reports(&self) -> Vec<UsageSummary> {
        self.by_id
            .values()
            .map(SharedResource::report_usage)
            .collect()
    }
}
