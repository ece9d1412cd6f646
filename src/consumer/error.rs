use thiserror::Error;

use crate::resource::ResourceError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsumeError {
    #[error("{resource} is not assigned to {consumer}; assign it first")]
    NotAssigned { resource: String, consumer: String },

    #[error(transparent)]
    Resource(#[from] ResourceError),
}
