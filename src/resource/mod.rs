pub mod error;
pub mod pool;
pub mod shared;
pub mod types;

pub use error::ResourceError;
pub use pool::Resource;
pub use shared::SharedResource;
pub use types::{ConsumptionReceipt, KindDetail, ResourceId, ResourceKind, UsageEvent, UsageSummary};
