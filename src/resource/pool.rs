use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::resource::{
    error::ResourceError,
    types::{ConsumptionReceipt, KindDetail, ResourceKind, UsageEvent, UsageSummary},
};

/// A depletable pool of one resource kind. `total_available` only ever
/// decreases, and only through `update_availability`; `initial_amount` is
/// the construction-time snapshot used for consumption reporting.
///
/// Invariant: `0 <= total_available <= initial_amount`.
#[derive(Debug, Clone)]
pub struct Resource {
    kind: ResourceKind,
    total_available: f64,
    initial_amount: f64,
    renewable: bool,
    usage_log: Vec<UsageEvent>,
}

impl Resource {
    /// Create a pool with the kind's default renewability. `initial_amount`
    /// is expected to be non-negative.
    pub fn new(kind: ResourceKind, initial_amount: f64) -> Self {
        let renewable = kind.default_renewable();
        Self::with_renewable(kind, initial_amount, renewable)
    }

    pub fn with_renewable(kind: ResourceKind, initial_amount: f64, renewable: bool) -> Self {
        Self {
            kind,
            total_available: initial_amount,
            initial_amount,
            renewable,
            usage_log: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn total_available(&self) -> f64 {
        self.total_available
    }

    pub fn initial_amount(&self) -> f64 {
        self.initial_amount
    }

    pub fn renewable(&self) -> bool {
        self.renewable
    }

    pub fn consumed(&self) -> f64 {
        self.initial_amount - self.total_available
    }

    pub fn usage_log(&self) -> &[UsageEvent] {
        &self.usage_log
    }

    /// The sole mutator: draw `amount` from the pool. Fails without
    /// touching state when the amount is non-positive or exceeds what is
    /// available.
    pub fn update_availability(
        &mut self,
        amount: f64,
    ) -> Result<ConsumptionReceipt, ResourceError> {
        if amount <= 0.0 {
            return Err(ResourceError::InvalidAmount { amount });
        }
        if amount > self.total_available {
            return Err(ResourceError::InsufficientQuantity {
                name: self.name(),
                requested: amount,
                available: self.total_available,
            });
        }

        self.total_available -= amount;
        self.usage_log.push(UsageEvent {
            resource: self.name().to_string(),
            amount,
            remaining: round2(self.total_available),
            timestamp: now_rfc3339(),
        });

        Ok(ConsumptionReceipt {
            resource: self.name().to_string(),
            amount,
            remaining: self.total_available,
        })
    }

    /// Pure read: current availability, cumulative consumption, and the
    /// kind-specific reporting metadata.
    pub fn report_usage(&self) -> UsageSummary {
        let consumed = self.consumed();
        let utilisation_pct = if self.initial_amount > 0.0 {
            round2(consumed / self.initial_amount * 100.0)
        } else {
            0.0
        };

        UsageSummary {
            name: self.name().to_string(),
            total_available: round2(self.total_available),
            consumed: round2(consumed),
            renewable: self.renewable,
            utilisation_pct,
            unit: self.kind.unit().to_string(),
            detail: kind_detail(&self.kind),
        }
    }
}

fn kind_detail(kind: &ResourceKind) -> KindDetail {
    match kind {
        ResourceKind::Water { source } => KindDetail::Water {
            source: source.clone(),
        },
        ResourceKind::Electricity { energy_type } => KindDetail::Electricity {
            energy_type: energy_type.clone(),
        },
        ResourceKind::Waste { waste_category } => KindDetail::Waste {
            waste_category: waste_category.clone(),
            label_consumed: "waste_deposited".to_string(),
        },
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"))
}
