pub mod error;
pub mod registry;
pub mod session;

pub use error::SessionError;
pub use registry::ResourceRegistry;
pub use session::{Session, SessionOverview};
