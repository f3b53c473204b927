//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates validation, authentication and repository calls.

pub mod auth;
pub mod context;
pub mod error;
pub mod expiry;
pub mod reaction;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use expiry::ExpiryService;
pub use reaction::ReactionService;

#[cfg(test)]
pub(crate) mod test_support;
