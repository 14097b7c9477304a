//! Persistence layer: per-entity repositories over the shared pool.

pub mod token_repository;
pub mod user_repository;
