use crate::{
    consumer::{
        error::ConsumeError,
        types::{AssignOutcome, ConsumerId, ConsumerReport, ConsumptionEvent},
    },
    resource::{ConsumptionReceipt, SharedResource},
};

/// An entity (household, factory, office) permitted to draw from a fixed
/// set of assigned pools. Keeps its own append-only consumption history;
/// availability checks stay with the resource itself.
#[derive(Debug, Clone)]
pub struct Consumer {
    consumer_id: ConsumerId,
    name: String,
    assigned: Vec<SharedResource>,
    history: Vec<ConsumptionEvent>,
}

impl Consumer {
    pub fn new(consumer_id: impl Into<ConsumerId>, name: impl Into<String>) -> Self {
        Self {
            consumer_id: consumer_id.into(),
            name: name.into(),
            assigned: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn with_resources(
        consumer_id: impl Into<ConsumerId>,
        name: impl Into<String>,
        resources: impl IntoIterator<Item = SharedResource>,
    ) -> Self {
        let mut consumer = Self::new(consumer_id, name);
        for resource in resources {
            consumer.assign_resource(&resource);
        }
        consumer
    }

    pub fn consumer_id(&self) -> &str {
        &self.consumer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assigned_resources(&self) -> &[SharedResource] {
        &self.assigned
    }

    pub fn consumption_history(&self) -> &[ConsumptionEvent] {
        &self.history
    }

    pub fn is_assigned(&self, resource: &SharedResource) -> bool {
        self.assigned.iter().any(|held| held.same(resource))
    }

    /// Idempotent by identity: assigning a pool this consumer already
    /// holds leaves the assignment list unchanged.
    pub fn assign_resource(&mut self, resource: &SharedResource) -> AssignOutcome {
        if self.is_assigned(resource) {
            return AssignOutcome::AlreadyAssigned;
        }
        self.assigned.push(resource.clone());
        AssignOutcome::Assigned
    }

    /// Draw from an assigned pool. The availability outcome comes through
    /// from the resource unaltered; only successful draws are recorded in
    /// this consumer's history.
    pub fn consume(
        &mut self,
        resource: &SharedResource,
        amount: f64,
    ) -> Result<ConsumptionReceipt, ConsumeError> {
        if !self.is_assigned(resource) {
            return Err(ConsumeError::NotAssigned {
                resource: resource.name().to_string(),
                consumer: self.name.clone(),
            });
        }

        let receipt = resource.consume(amount)?;
        self.history.push(ConsumptionEvent {
            consumer: self.name.clone(),
            resource: receipt.resource.clone(),
            amount: receipt.amount,
            remaining: receipt.remaining,
        });
        Ok(receipt)
    }

    /// Pure read: per-resource reports in assignment order plus this
    /// consumer's full history.
    pub fn generate_usage_report(&self) -> ConsumerReport {
        ConsumerReport {
            consumer_id: self.consumer_id.clone(),
            name: self.name.clone(),
            resources: self
                .assigned
                .iter()
                .map(SharedResource::report_usage)
                .collect(),
            consumption_history: self.history.clone(),
            total_consumption_events: self.history.len(),
        }
    }
}
