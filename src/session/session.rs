use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    config::SeedConfig,
    consumer::{AssignOutcome, Consumer, ConsumerId, ConsumerReport},
    resource::{ConsumptionReceipt, Resource, SharedResource, UsageSummary},
    session::{error::SessionError, registry::ResourceRegistry},
};

/// Everything one interactive session can render, in one serialisable
/// record. Front ends re-render this wholesale after every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOverview {
    pub resources: Vec<UsageSummary>,
    pub consumers: Vec<ConsumerReport>,
}

/// The per-session context object: the resource arena plus every consumer,
/// created once at startup and threaded through each action. All state is
/// process-lifetime and in-memory.
#[derive(Debug, Default)]
pub struct Session {
    registry: ResourceRegistry,
    consumers: BTreeMap<ConsumerId, Consumer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from seed tables: register every pool, then every
    /// consumer with its listed assignments.
    pub fn from_seed(seed: &SeedConfig) -> Result<Self, SessionError> {
        let mut session = Self::new();

        for entry in &seed.resources {
            let resource = match entry.renewable {
                Some(renewable) => {
                    Resource::with_renewable(entry.kind.clone(), entry.initial_amount, renewable)
                }
                None => Resource::new(entry.kind.clone(), entry.initial_amount),
            };
            session.register_resource(entry.id.clone(), resource)?;
        }

        for entry in &seed.consumers {
            session.register_consumer(Consumer::new(entry.id.clone(), entry.name.clone()))?;
            for resource_id in &entry.resources {
                session.assign(&entry.id, resource_id)?;
            }
        }

        tracing::info!(
            target: "session",
            resources = session.registry.len(),
            consumers = session.consumers.len(),
            "session_seeded"
        );
        Ok(session)
    }

    pub fn register_resource(
        &mut self,
        id: impl Into<String>,
        resource: Resource,
    ) -> Result<SharedResource, SessionError> {
        let handle = self.registry.register(id, resource)?;
        tracing::info!(
            target: "session",
            resource_id = handle.id(),
            resource = handle.name(),
            available = handle.total_available(),
            "resource_registered"
        );
        Ok(handle)
    }

    pub fn register_consumer(&mut self, consumer: Consumer) -> Result<(), SessionError> {
        let id = consumer.consumer_id().to_string();
        if self.consumers.contains_key(&id) {
            return Err(SessionError::ConsumerIdConflict(id));
        }
        tracing::info!(
            target: "session",
            consumer_id = %id,
            consumer = consumer.name(),
            "consumer_registered"
        );
        self.consumers.insert(id, consumer);
        Ok(())
    }

    pub fn resource(&self, id: &str) -> Option<SharedResource> {
        self.registry.get(id)
    }

    pub fn consumer(&self, id: &str) -> Option<&Consumer> {
        self.consumers.get(id)
    }

    pub fn assign(
        &mut self,
        consumer_id: &str,
        resource_id: &str,
    ) -> Result<AssignOutcome, SessionError> {
        let resource = self
            .registry
            .get(resource_id)
            .ok_or_else(|| SessionError::UnknownResource(resource_id.to_string()))?;
        let consumer = self
            .consumers
            .get_mut(consumer_id)
            .ok_or_else(|| SessionError::UnknownConsumer(consumer_id.to_string()))?;

        let outcome = consumer.assign_resource(&resource);
        tracing::debug!(
            target: "session",
            consumer_id,
            resource_id,
            outcome = ?outcome,
            "resource_assigned"
        );
        Ok(outcome)
    }

    pub fn consume(
        &mut self,
        consumer_id: &str,
        resource_id: &str,
        amount: f64,
    ) -> Result<ConsumptionReceipt, SessionError> {
        let consumer = self
            .consumers
            .get_mut(consumer_id)
            .ok_or_else(|| SessionError::UnknownConsumer(consumer_id.to_string()))?;
        let resource = self
            .registry
            .get(resource_id)
            .ok_or_else(|| SessionError::UnknownResource(resource_id.to_string()))?;

        match consumer.consume(&resource, amount) {
            Ok(receipt) => {
                tracing::info!(
                    target: "session",
                    consumer_id,
                    resource_id,
                    amount,
                    remaining = receipt.remaining,
                    "consumption_recorded"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(
                    target: "session",
                    consumer_id,
                    resource_id,
                    amount,
                    error = %err,
                    "consumption_rejected"
                );
                Err(err.into())
            }
        }
    }

    pub fn usage_report(&self, consumer_id: &str) -> Result<ConsumerReport, SessionError> {
        self.consumers
            .get(consumer_id)
            .map(Consumer::generate_usage_report)
            .ok_or_else(|| SessionError::UnknownConsumer(consumer_id.to_string()))
    }

    pub fn resource_reports(&self) -> Vec<UsageSummary> {
        self.registry.reports()
    }

    pub fn overview(&self) -> SessionOverview {
        SessionOverview {
            resources: self.registry.reports(),
            consumers: self
                .consumers
                .values()
                .map(Consumer::generate_usage_report)
                .collect(),
        }
    }
}
