//! External collaborator clients: email transport and federated identity.

pub mod email_service;
pub mod google_verifier;
