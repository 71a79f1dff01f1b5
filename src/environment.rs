//! API environments
//!
//! Monerium runs two environments with separate user bases and data:
//! production and sandbox. Each fixes an API base URL (all REST calls,
//! including the authorization redirect) and a web base URL (the hosted
//! UI, useful when building onboarding links). Selection happens once at
//! client construction and is immutable afterwards.

/// A named API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    /// Base URL for REST calls and the authorization redirect.
    pub fn api_base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.monerium.app",
            Environment::Sandbox => "https://api.monerium.dev",
        }
    }

    /// Base URL of the hosted web UI.
    pub fn web_base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://monerium.app",
            Environment::Sandbox => "https://sandbox.monerium.dev",
        }
    }
}

impl Default for Environment {
    /// Sandbox, so that a misconfigured integration never touches
    /// production money.
    fn default() -> Self {
        Environment::Sandbox
    }
}
