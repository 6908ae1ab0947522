//! Session credentials: storage, token helpers, and the sign-in redirect hook.

pub mod error;
pub mod navigator;
pub mod store;
pub mod token;

pub use error::StoreError;
pub use navigator::{LogNavigator, Navigator};
pub use store::{FileSessionStore, MemorySessionStore, Session, SessionStore, SessionStoreConfig};
pub use token::{AccessClaims, CredentialPair};
