pub mod consumer;
pub mod error;
pub mod types;

pub use consumer::Consumer;
pub use error::ConsumeError;
pub use types::{AssignOutcome, ConsumerId, ConsumerReport, ConsumptionEvent};
