//! HTTP API surface: shared response plumbing plus per-area routers.

pub mod common;
pub mod password_reset;
pub mod user;
