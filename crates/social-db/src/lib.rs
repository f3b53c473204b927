//! # social-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `social-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers, including legacy emoji normalization
//! - The transactional reaction ledger and the expiry sweep
//!
//! ## Usage
//!
//! ```rust,ignore
//! use social_db::pool::{create_pool, DatabaseConfig};
//! use social_db::repositories::PgReactionRepository;
//! use social_core::traits::ReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!
//!     let rewritten = reactions.normalize_legacy().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPostRepository, PgReactionRepository};
