//! Monerium API client
//!
//! Owns the auth session (retained PKCE verifier, bearer profile, derived
//! authorization header) and the single request pipeline every resource
//! operation goes through. Resource methods are thin: they map typed
//! arguments onto a method, a path, and an optional pre-serialized body,
//! then delegate to the pipeline.
//!
//! Flow:
//! 1. Construct a client bound to an [`Environment`]
//! 2. `authorization_url()` generates a PKCE pair (verifier retained)
//!    and returns the redirect URL for the end user
//! 3. The authorization code comes back out-of-band
//! 4. `authenticate()` exchanges it (or a refresh token / client secret)
//!    for a [`BearerProfile`]
//! 5. Every later call reuses the pipeline, which injects the cached
//!    `Authorization: Bearer <token>` header

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::encoding;
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::grant::{AuthArgs, GrantType};
use crate::pkce::PkcePair;
use crate::types::{
    AuthContext, Balances, BearerProfile, LinkAddress, NewOrder, Order, OrderFilter, Profile,
    SupportingDoc, Token,
};

/// Content for one request. Each variant carries its payload already
/// serialized; the pipeline passes it through untouched and only picks
/// the matching `Content-Type`.
enum RequestBody {
    Empty,
    Json(String),
    Form(String),
}

impl RequestBody {
    fn json<T: Serialize>(value: &T) -> Result<Self> {
        let text = serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))?;
        Ok(RequestBody::Json(text))
    }

    fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Form(_) => "application/x-www-form-urlencoded",
            RequestBody::Empty | RequestBody::Json(_) => "application/json",
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(text) | RequestBody::Form(text) => Some(text),
        }
    }
}

/// Caller-supplied fields for the PKCE authorization URL.
///
/// `state` is an opaque value for CSRF protection, returned unchanged in
/// the callback. `address` pre-selects a wallet address in the hosted
/// authorization UI.
#[derive(Debug, Clone, Default)]
pub struct AuthFlowParams {
    pub client_id: String,
    pub state: String,
    pub redirect_uri: Option<String>,
    pub scope: Option<String>,
    pub address: Option<String>,
}

/// A Monerium API session.
///
/// Holds at most one bearer profile; a successful `authenticate` replaces
/// it wholesale and recomputes the cached authorization header in the
/// same step. `authenticate` takes `&mut self`, so within safe Rust a
/// resource call cannot race the header update on a single session; to
/// share one session across tasks, wrap it in the caller's own lock. No
/// state is aliased between client instances.
///
/// There is no automatic token refresh: when the access token expires,
/// call `authenticate` again with [`AuthArgs::refresh_token`].
pub struct MoneriumClient {
    api_base: String,
    http: reqwest::Client,
    code_verifier: Option<String>,
    bearer_profile: Option<BearerProfile>,
    auth_header: Option<String>,
}

impl MoneriumClient {
    /// Create a client bound to the given environment.
    pub fn new(env: Environment) -> Self {
        Self::with_api_base_url(env.api_base_url())
    }

    /// Create a client against an explicit API base URL.
    ///
    /// Intended for tests running against a local stub server; production
    /// code should pick an [`Environment`] via [`MoneriumClient::new`].
    pub fn with_api_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base: api_base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            code_verifier: None,
            bearer_profile: None,
            auth_header: None,
        }
    }

    /// The PKCE verifier retained by the last `authorization_url` call.
    pub fn code_verifier(&self) -> Option<&str> {
        self.code_verifier.as_deref()
    }

    /// The bearer profile from the last successful `authenticate` call.
    pub fn bearer_profile(&self) -> Option<&BearerProfile> {
        self.bearer_profile.as_ref()
    }

    // -- authentication

    /// Build the PKCE authorization URL and retain the code verifier.
    ///
    /// Returns `{api}/auth?{query}` carrying the caller's fields plus the
    /// derived `code_challenge`, `code_challenge_method=S256`, and
    /// `response_type=code`. The verifier stays on the session and
    /// completes the authorization-code exchange later; unset optional
    /// fields are omitted from the query. No network call happens here.
    pub fn authorization_url(&mut self, params: &AuthFlowParams) -> String {
        let pair = PkcePair::generate();

        let mut fields: Vec<(&str, &str)> = vec![("client_id", params.client_id.as_str())];
        if let Some(uri) = &params.redirect_uri {
            fields.push(("redirect_uri", uri));
        }
        if let Some(scope) = &params.scope {
            fields.push(("scope", scope));
        }
        fields.push(("state", &params.state));
        if let Some(address) = &params.address {
            fields.push(("address", address));
        }
        fields.push(("code_challenge", &pair.challenge));
        fields.push(("code_challenge_method", "S256"));
        fields.push(("response_type", "code"));

        let url = format!("{}/auth?{}", self.api_base, encoding::encode_pairs(fields));
        self.code_verifier = Some(pair.verifier);
        debug!(state = %params.state, "built authorization url");
        url
    }

    /// Exchange auth arguments for a bearer profile.
    ///
    /// The grant type is classified from the supplied fields (see
    /// [`GrantType::classify`]); unclassifiable arguments fail before any
    /// network call. On success the stored bearer profile is replaced and
    /// the authorization header recomputed; every error from the exchange
    /// itself propagates unchanged, including the upstream JSON payload
    /// on non-2xx.
    pub async fn authenticate(&mut self, args: AuthArgs) -> Result<()> {
        let grant = GrantType::classify(&args)?;

        let mut args = args;
        // The verifier retained by `authorization_url` completes the code
        // flow unless the caller supplied one explicitly.
        if grant == GrantType::AuthorizationCode && args.code_verifier.is_none() {
            args.code_verifier = self.code_verifier.clone();
        }

        let body = encoding::encode_pairs(args.form_params(grant));
        let profile: BearerProfile = self
            .request(Method::POST, "auth/token", RequestBody::Form(body))
            .await?;
        info!(grant = grant.as_str(), profile = %profile.profile, "authenticated");
        self.set_bearer_profile(profile);
        Ok(())
    }

    /// Single mutation point for session credentials: replaces the
    /// profile wholesale and recomputes the derived header together.
    fn set_bearer_profile(&mut self, profile: BearerProfile) {
        self.auth_header = Some(format!("Bearer {}", profile.access_token));
        self.bearer_profile = Some(profile);
    }

    // -- read methods

    pub async fn auth_context(&self) -> Result<AuthContext> {
        self.request(Method::GET, "auth/context", RequestBody::Empty)
            .await
    }

    pub async fn profile(&self, profile_id: &str) -> Result<Profile> {
        self.request(
            Method::GET,
            &format!("profiles/{profile_id}"),
            RequestBody::Empty,
        )
        .await
    }

    /// Balances across all of the caller's accounts.
    pub async fn balances(&self) -> Result<Vec<Balances>> {
        self.request(Method::GET, "balances", RequestBody::Empty)
            .await
    }

    /// Balances for one profile's accounts.
    pub async fn profile_balances(&self, profile_id: &str) -> Result<Balances> {
        self.request(
            Method::GET,
            &format!("profiles/{profile_id}/balances"),
            RequestBody::Empty,
        )
        .await
    }

    /// Orders, optionally narrowed by filter fields. Filters are encoded
    /// with form-urlencoded query semantics; unset fields are omitted.
    pub async fn orders(&self, filter: Option<&OrderFilter>) -> Result<Vec<Order>> {
        let path = match filter {
            Some(filter) => {
                let query = encoding::encode_params(filter)?;
                if query.is_empty() {
                    "orders".to_string()
                } else {
                    format!("orders?{query}")
                }
            }
            None => "orders".to_string(),
        };
        self.request(Method::GET, &path, RequestBody::Empty).await
    }

    pub async fn order(&self, order_id: &str) -> Result<Order> {
        self.request(
            Method::GET,
            &format!("orders/{order_id}"),
            RequestBody::Empty,
        )
        .await
    }

    /// The e-money token contracts available in this environment.
    pub async fn tokens(&self) -> Result<Vec<Token>> {
        self.request(Method::GET, "tokens", RequestBody::Empty)
            .await
    }

    // -- write methods

    /// Link a signed wallet address to a profile.
    pub async fn link_address(
        &self,
        profile_id: &str,
        link: &LinkAddress,
    ) -> Result<serde_json::Value> {
        self.request(
            Method::POST,
            &format!("profiles/{profile_id}/addresses"),
            RequestBody::json(link)?,
        )
        .await
    }

    /// Place a redeem or issue order, optionally under a specific profile.
    pub async fn place_order(&self, order: &NewOrder, profile_id: Option<&str>) -> Result<Order> {
        let path = match profile_id {
            Some(id) => format!("profiles/{id}/orders"),
            None => "orders".to_string(),
        };
        self.request(Method::POST, &path, RequestBody::json(order)?)
            .await
    }

    /// Upload a supporting document for an order. The document fields
    /// are sent form-encoded.
    pub async fn upload_supporting_document<D: Serialize>(
        &self,
        document: &D,
    ) -> Result<SupportingDoc> {
        let body = encoding::encode_params(document)?;
        self.request(
            Method::POST,
            "files/supporting-document",
            RequestBody::Form(body),
        )
        .await
    }

    // -- request pipeline

    /// The single authenticated transport behind every operation.
    ///
    /// Builds `{api_base}/{path}` (a path may carry its own query string,
    /// passed through untouched), attaches `Content-Type` from the body
    /// variant and the cached authorization header (empty when
    /// unauthenticated; the server answers 401), performs one attempt,
    /// and parses the response as JSON regardless of status so that
    /// error payloads survive verbatim.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T> {
        let url = format!("{}/{}", self.api_base, path);
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, body.content_type())
            .header(AUTHORIZATION, self.auth_header.as_deref().unwrap_or(""));
        if let Some(payload) = body.into_text() {
            builder = builder.body(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, path, "api response");

        let value: serde_json::Value = serde_json::from_str(&text)?;
        if status.is_success() {
            Ok(serde_json::from_value(value)?)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                body: value,
            })
        }
    }
}
