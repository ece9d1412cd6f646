use serde::{Deserialize, Serialize};

use crate::resource::UsageSummary;

pub type ConsumerId = String;

/// Result of an assignment attempt. A repeat assignment is a benign
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOutcome {
    Assigned,
    AlreadyAssigned,
}

/// One entry in a consumer's own history: a denormalised snapshot of a
/// successful draw, parallel to the resource's usage log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionEvent {
    pub consumer: String,
    pub resource: String,
    pub amount: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerReport {
    pub consumer_id: ConsumerId,
    pub name: String,
    pub resources: Vec<UsageSummary>,
    pub consumption_history: Vec<ConsumptionEvent>,
    pub total_consumption_events: usize,
}
