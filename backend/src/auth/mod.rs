//! Authentication: login flows, session middleware and the orchestrator
//! service shared by the user and password-reset endpoints.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
