//! # social-service
//!
//! Application layer containing the reaction and expiry use cases, caller
//! authentication, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApplyReactionRequest, CleanupResponse, HealthChecks, HealthResponse, ReactionInput,
    ReactionResponse, ReadinessResponse,
};
pub use services::{
    AuthService, ExpiryService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
