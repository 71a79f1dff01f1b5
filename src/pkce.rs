//! PKCE (Proof Key for Code Exchange) per RFC 7636
//!
//! Generates the code verifier and S256 challenge used during the OAuth
//! authorization flow. The verifier stays with the client session and is
//! sent during token exchange; the challenge is embedded in the
//! authorization URL so the authorization server can verify the exchange
//! request came from the party that initiated the flow.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use sha2::{Digest, Sha256};

/// A verifier/challenge pair for one authorization flow.
///
/// The verifier is the secret half; the challenge is derived from it and
/// safe to expose in the redirect URL.
#[derive(Debug, Clone)]
pub struct PkcePair {
    pub verifier: String,
    pub challenge: String,
}

impl PkcePair {
    /// Generate a fresh pair from the OS random source.
    pub fn generate() -> Self {
        Self::from_verifier(generate_verifier())
    }

    /// Derive the pair from a known verifier.
    ///
    /// Deterministic, which makes it the substitution point for tests
    /// that need a predictable challenge.
    pub fn from_verifier(verifier: impl Into<String>) -> Self {
        let verifier = verifier.into();
        let challenge = compute_challenge(&verifier);
        Self {
            verifier,
            challenge,
        }
    }
}

/// Generate a cryptographically random PKCE code verifier.
///
/// Produces 64 random bytes encoded as URL-safe base64 without padding
/// (86 characters, within RFC 7636's required 43-128 range).
pub fn generate_verifier() -> String {
    let mut bytes = [0u8; 64];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compute the S256 code challenge from a verifier.
///
/// `challenge = BASE64URL(SHA256(verifier))`, no padding.
pub fn compute_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}
