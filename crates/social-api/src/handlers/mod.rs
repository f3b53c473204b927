//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod cleanup;
pub mod health;
pub mod reactions;
