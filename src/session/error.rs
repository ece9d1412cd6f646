use thiserror::Error;

use crate::consumer::ConsumeError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("unknown consumer id '{0}'")]
    UnknownConsumer(String),

    #[error("unknown resource id '{0}'")]
    UnknownResource(String),

    #[error("resource id '{0}' is already registered")]
    ResourceIdConflict(String),

    #[error("consumer id '{0}' is already registered")]
    ConsumerIdConflict(String),

    #[error(transparent)]
    Consume(#[from] ConsumeError),
}
