use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceError {
    #[error("invalid amount ({amount}): consumption must be positive")]
    InvalidAmount { amount: f64 },

    #[error("insufficient {name}: requested {requested}, but only {available:.2} available")]
    InsufficientQuantity {
        name: &'static str,
        requested: f64,
        available: f64,
    },
}
