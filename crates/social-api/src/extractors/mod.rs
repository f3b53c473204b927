//! Axum extractors for request handling
//!
//! Custom extractors for the bearer credential and validated JSON bodies.

mod auth;
mod validated;

pub use auth::BearerToken;
pub use validated::ValidatedJson;
