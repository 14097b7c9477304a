//! Shared utility helpers used across the backend.

pub mod jwt;
pub mod password;
pub mod secret;
