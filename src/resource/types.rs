use std::fmt;

use serde::{Deserialize, Serialize};

pub type ResourceId = String;

/// Classification of a depletable pool, carrying the one attribute that
/// differs per kind (origin of water, generation method, waste category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceKind {
    Water { source: String },
    Electricity { energy_type: String },
    Waste { waste_category: String },
}

impl ResourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Water { .. } => "Water",
            ResourceKind::Electricity { .. } => "Electricity",
            ResourceKind::Waste { .. } => "Waste",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ResourceKind::Water { .. } => "litres",
            ResourceKind::Electricity { .. } => "kWh",
            ResourceKind::Waste { .. } => "kg",
        }
    }

    pub fn default_renewable(&self) -> bool {
        matches!(
            self,
            ResourceKind::Water { .. } | ResourceKind::Electricity { .. }
        )
    }
}

/// One entry in a resource's append-only usage log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub resource: String,
    pub amount: f64,
    pub remaining: f64,
    pub timestamp: String,
}

/// Successful outcome of a consumption call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionReceipt {
    pub resource: String,
    pub amount: f64,
    pub remaining: f64,
}

impl fmt::Display for ConsumptionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} units of {} consumed, remaining {:.2}",
            self.amount, self.resource, self.remaining
        )
    }
}

/// Structured usage report for one resource. The kind-specific fields are
/// flattened into the same record, so renderers see a flat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub name: String,
    pub total_available: f64,
    pub consumed: f64,
    pub renewable: bool,
    pub utilisation_pct: f64,
    pub unit: String,
    #[serde(flatten)]
    pub detail: KindDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindDetail {
    Water {
        source: String,
    },
    Electricity {
        energy_type: String,
    },
    // "consumed" capacity means waste already deposited, hence the label.
    Waste {
        waste_category: String,
        label_consumed: String,
    },
}
