//! OAuth grant arguments and grant-type classification
//!
//! The token endpoint accepts three grant shapes. Following the API's own
//! convention, the shape is recognized structurally from which fields are
//! present rather than from an explicit tag, so classification must be
//! total and apply a fixed precedence (the field sets overlap: an
//! authorization-code exchange may carry a leftover refresh token).

use crate::error::{Error, Result};

/// The OAuth2 grant used to obtain a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    AuthorizationCode,
    RefreshToken,
    ClientCredentials,
}

impl GrantType {
    /// Classify auth arguments by field presence.
    ///
    /// Precedence is fixed: `code` wins over `refresh_token`, which wins
    /// over `client_secret`. Arguments carrying none of the three fail
    /// with [`Error::UnclassifiableGrant`] before any network call.
    pub fn classify(args: &AuthArgs) -> Result<Self> {
        if args.code.is_some() {
            Ok(GrantType::AuthorizationCode)
        } else if args.refresh_token.is_some() {
            Ok(GrantType::RefreshToken)
        } else if args.client_secret.is_some() {
            Ok(GrantType::ClientCredentials)
        } else {
            Err(Error::UnclassifiableGrant)
        }
    }

    /// Wire literal for the `grant_type` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::RefreshToken => "refresh_token",
            GrantType::ClientCredentials => "client_credentials",
        }
    }
}

/// Arguments for [`MoneriumClient::authenticate`](crate::MoneriumClient::authenticate).
///
/// One struct covers all three grants; the constructors below populate
/// the fields each grant needs. `client_id` is always required.
#[derive(Debug, Clone, Default)]
pub struct AuthArgs {
    pub client_id: String,
    pub code: Option<String>,
    pub code_verifier: Option<String>,
    pub redirect_uri: Option<String>,
    pub refresh_token: Option<String>,
    pub client_secret: Option<String>,
    pub scope: Option<String>,
}

impl AuthArgs {
    /// Complete the PKCE flow with the authorization code returned to the
    /// redirect URI.
    ///
    /// If no verifier is set explicitly, the client substitutes the one
    /// it retained when building the authorization URL.
    pub fn authorization_code(
        client_id: impl Into<String>,
        code: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            code: Some(code.into()),
            redirect_uri: Some(redirect_uri.into()),
            ..Self::default()
        }
    }

    /// Obtain a fresh access token from a refresh token.
    pub fn refresh_token(
        client_id: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            refresh_token: Some(refresh_token.into()),
            ..Self::default()
        }
    }

    /// Authenticate a confidential client with its secret.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Some(client_secret.into()),
            ..Self::default()
        }
    }

    /// Set an explicit code verifier for the authorization-code grant.
    pub fn with_code_verifier(mut self, code_verifier: impl Into<String>) -> Self {
        self.code_verifier = Some(code_verifier.into());
        self
    }

    /// Narrow the requested scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Ordered key/value pairs for the token exchange body, with the
    /// resolved `grant_type` merged in.
    pub fn form_params(&self, grant: GrantType) -> Vec<(&str, &str)> {
        let mut params: Vec<(&str, &str)> = vec![("client_id", self.client_id.as_str())];
        if let Some(code) = &self.code {
            params.push(("code", code));
        }
        if let Some(verifier) = &self.code_verifier {
            params.push(("code_verifier", verifier));
        }
        if let Some(uri) = &self.redirect_uri {
            params.push(("redirect_uri", uri));
        }
        if let Some(token) = &self.refresh_token {
            params.push(("refresh_token", token));
        }
        if let Some(secret) = &self.client_secret {
            params.push(("client_secret", secret));
        }
        if let Some(scope) = &self.scope {
            params.push(("scope", scope));
        }
        params.push(("grant_type", grant.as_str()));
        params
    }
}
