//! Integration test utilities for the reaction service
//!
//! This crate provides helpers for running end-to-end tests against the
//! HTTP API, backed by an in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::MemoryStore;
