//! Identity collaborator: account registry, session tokens, and the bearer
//! auth middleware.

pub mod handlers;
pub mod middleware;
pub mod sessions;

pub use middleware::{auth_middleware, require_creator, require_viewer};
pub use sessions::{AccountRegistry, AuthError, Identity, SessionStore};
