//! Random secret generation for single-use tokens.

use rand::{Rng, rngs::OsRng};

/// Generates a hex-encoded secret with 32 bytes of entropy, suitable for use
/// as a bearer capability in a verification or reset link.
pub fn generate_token_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill(&mut bytes[..]);
    hex::encode(bytes)
}
