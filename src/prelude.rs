//! Convenience re-exports for common use.

pub use crate::auth::{
    CredentialPair, FileSessionStore, LogNavigator, MemorySessionStore, Navigator, Session,
    SessionStore,
};
pub use crate::client::{ApiClient, ApiRequest, ApiResponse};
pub use crate::config::ClientConfig;
pub use crate::error::{Result, RotaError};
pub use crate::types::{TimeWindow, User, UserRole};
