//! Monerium e-money API client
//!
//! OAuth2 authentication (authorization-code with PKCE, refresh-token,
//! client-credentials) and typed resource operations against the
//! Monerium REST API. The crate is a plain client library: it holds the
//! current session in memory, performs one request per operation, and
//! leaves retry, persistence, and refresh scheduling to the embedding
//! application.
//!
//! Session flow:
//! 1. `MoneriumClient::new(Environment::Sandbox)`
//! 2. `client.authorization_url(..)` — PKCE pair generated, verifier
//!    retained, user redirected
//! 3. Authorization code arrives at the redirect URI
//! 4. `client.authenticate(AuthArgs::authorization_code(..))` — token
//!    exchange, bearer profile stored
//! 5. `client.orders(..)`, `client.place_order(..)`, ... — every call
//!    goes through the same pipeline with the cached bearer header

pub mod client;
pub mod encoding;
pub mod environment;
pub mod error;
pub mod grant;
pub mod pkce;
pub mod types;

pub use client::{AuthFlowParams, MoneriumClient};
pub use environment::Environment;
pub use error::{Error, Result};
pub use grant::{AuthArgs, GrantType};
pub use pkce::{PkcePair, compute_challenge, generate_verifier};
pub use types::*;
