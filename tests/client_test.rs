//! Client integration tests against a `wiremock` mock server.
//!
//! Covers the token exchange (form encoding, grant classification,
//! error-body passthrough), bearer header derivation and propagation,
//! and the path/query/body mapping of the resource operations.

use serde_json::{Value, json};
use wiremock::matchers::{any, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use monerium_sdk::{
    AuthArgs, AuthFlowParams, Chain, Counterpart, CounterpartDetails, Currency, Environment,
    Error, MoneriumClient, Network, NewOrder, OrderFilter, OrderKind, PaymentIdentifier,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn bearer_profile_json(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": "rt_1",
        "profile": "prof-1",
        "userId": "user-1"
    })
}

fn order_json() -> Value {
    json!({
        "id": "o1",
        "profile": "prof-1",
        "accountId": "acc-1",
        "address": "0xabc",
        "kind": "redeem",
        "amount": "100",
        "currency": "eur",
        "totalFee": "0",
        "fees": [],
        "counterpart": {
            "identifier": { "standard": "iban", "iban": "DE89370400440532013000" },
            "details": { "firstName": "Jane", "lastName": "Doe" }
        },
        "memo": "invoice 42",
        "rejectedReason": "",
        "supportingDocumentId": "",
        "meta": {
            "approvedAt": "2023-04-30T02:08:15Z",
            "processedAt": "2023-04-30T02:09:15Z",
            "rejectedAt": "",
            "state": "processed",
            "placedBy": "user-1",
            "placedAt": "2023-04-30T02:08:00Z",
            "receivedAmount": "100",
            "sentAmount": "100"
        }
    })
}

fn new_order() -> NewOrder {
    NewOrder {
        kind: OrderKind::Redeem,
        amount: "100".into(),
        signature: "0xsig".into(),
        account_id: None,
        address: "0xabc".into(),
        currency: Currency::Eur,
        counterpart: Counterpart {
            identifier: PaymentIdentifier::Iban {
                iban: "DE89370400440532013000".into(),
            },
            details: CounterpartDetails::Individual {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                country: None,
            },
        },
        message: "Send EUR 100 to DE89370400440532013000".into(),
        memo: "invoice 42".into(),
        chain: Chain::Ethereum,
        network: Network::Mainnet,
        supporting_document_id: None,
    }
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// The token exchange is a form-encoded POST carrying the classified
/// grant_type, and the returned access token drives the Authorization
/// header of every later call.
#[tokio::test]
async fn authenticate_stores_bearer_and_sends_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code-1"))
        .and(body_string_contains("code_verifier=v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bearer_profile_json("tok123")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/context"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "user-1",
            "email": "jane@example.com",
            "name": "Jane Doe",
            "roles": [],
            "auth": { "method": "password", "subject": "s", "verified": true },
            "defaultProfile": "prof-1",
            "profiles": [
                { "id": "prof-1", "type": "personal", "name": "Jane Doe", "perms": ["read", "write"] }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = MoneriumClient::with_api_base_url(server.uri());
    client
        .authenticate(
            AuthArgs::authorization_code("client-1", "auth-code-1", "https://example.com/cb")
                .with_code_verifier("v1"),
        )
        .await
        .expect("token exchange succeeds");

    let profile = client.bearer_profile().expect("profile stored");
    assert_eq!(profile.access_token, "tok123");
    assert_eq!(profile.user_id, "user-1");

    let context = client.auth_context().await.expect("context call succeeds");
    assert_eq!(context.default_profile, "prof-1");
}

/// The verifier retained by `authorization_url` completes the code
/// exchange when the caller does not pass one explicitly.
#[tokio::test]
async fn authenticate_uses_retained_verifier() {
    let server = MockServer::start().await;

    let mut client = MoneriumClient::with_api_base_url(server.uri());
    client.authorization_url(&AuthFlowParams {
        client_id: "client-1".into(),
        state: "state-1".into(),
        ..AuthFlowParams::default()
    });
    let verifier = client.code_verifier().expect("verifier retained").to_string();

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string_contains(format!("code_verifier={verifier}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(bearer_profile_json("tok456")))
        .expect(1)
        .mount(&server)
        .await;

    client
        .authenticate(AuthArgs::authorization_code(
            "client-1",
            "auth-code-2",
            "https://example.com/cb",
        ))
        .await
        .expect("exchange with retained verifier succeeds");
}

/// A new successful authentication replaces the prior profile wholesale.
#[tokio::test]
async fn reauthentication_replaces_bearer_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bearer_profile_json("tok-a")))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut client = MoneriumClient::with_api_base_url(server.uri());
    client
        .authenticate(AuthArgs::client_credentials("client-1", "secret"))
        .await
        .unwrap();
    assert_eq!(client.bearer_profile().unwrap().access_token, "tok-a");

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bearer_profile_json("tok-b")))
        .mount(&server)
        .await;

    client
        .authenticate(AuthArgs::refresh_token("client-1", "rt_1"))
        .await
        .unwrap();
    assert_eq!(client.bearer_profile().unwrap().access_token, "tok-b");
}

/// Upstream error payloads pass through verbatim, not wrapped in a
/// generic message.
#[tokio::test]
async fn token_exchange_error_body_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;

    let mut client = MoneriumClient::with_api_base_url(server.uri());
    let err = client
        .authenticate(AuthArgs::refresh_token("client-1", "rt_expired"))
        .await
        .expect_err("400 must fail");

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, json!({"error": "invalid_grant"}));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
    assert!(client.bearer_profile().is_none(), "no profile on failure");
}

/// Unclassifiable arguments fail before any request is made.
#[tokio::test]
async fn unclassifiable_grant_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(any()).respond_with(ResponseTemplate::new(500)).expect(0).mount(&server).await;

    let mut client = MoneriumClient::with_api_base_url(server.uri());
    let err = client
        .authenticate(AuthArgs {
            client_id: "client-1".into(),
            ..AuthArgs::default()
        })
        .await
        .expect_err("must fail");
    assert!(matches!(err, Error::UnclassifiableGrant));
}

/// End-to-end sandbox PKCE URL shape.
#[test]
fn sandbox_authorization_url_shape() {
    let mut client = MoneriumClient::new(Environment::Sandbox);
    let url = client.authorization_url(&AuthFlowParams {
        client_id: "abc".into(),
        state: "xyz".into(),
        ..AuthFlowParams::default()
    });

    assert!(url.starts_with("https://api.monerium.dev/auth?"));
    assert!(url.contains("code_challenge_method=S256"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("state=xyz"));
    assert!(url.contains("client_id=abc"));
}

// ---------------------------------------------------------------------------
// Resource operations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn orders_filter_becomes_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("state", "processed"))
        .and(query_param("profile", "prof-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([order_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = MoneriumClient::with_api_base_url(server.uri());
    let orders = client
        .orders(Some(&OrderFilter {
            profile: Some("prof-1".into()),
            state: Some(monerium_sdk::OrderState::Processed),
            ..OrderFilter::default()
        }))
        .await
        .expect("filtered orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "o1");
}

#[tokio::test]
async fn profile_and_balances_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profiles/prof-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "prof-1",
            "name": "Jane Doe",
            "kyc": { "state": "confirmed", "outcome": "approved" },
            "accounts": [{
                "address": "0xabc",
                "currency": "eur",
                "standard": "iban",
                "iban": "IS14 0159 2600 7654 5510 7303 39",
                "network": "mainnet",
                "chain": "ethereum"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/profiles/prof-1/balances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acc-1",
            "address": "0xabc",
            "chain": "ethereum",
            "network": "mainnet",
            "balances": [{ "currency": "eur", "amount": "100.5" }]
        })))
        .mount(&server)
        .await;

    let client = MoneriumClient::with_api_base_url(server.uri());

    let profile = client.profile("prof-1").await.expect("profile");
    assert_eq!(profile.accounts.len(), 1);

    let balances = client.profile_balances("prof-1").await.expect("balances");
    assert_eq!(balances.balances[0].amount, "100.5");
}

#[tokio::test]
async fn place_order_posts_json_under_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profiles/prof-1/orders"))
        .and(header("content-type", "application/json"))
        .and(body_string_contains("\"kind\":\"redeem\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = MoneriumClient::with_api_base_url(server.uri());
    let order = client
        .place_order(&new_order(), Some("prof-1"))
        .await
        .expect("order placed");
    assert_eq!(order.id, "o1");
}

#[tokio::test]
async fn supporting_document_uploads_form_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/supporting-document"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("name=invoice.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "doc-1",
            "name": "invoice.pdf",
            "type": "application/pdf",
            "size": 1024,
            "hash": "deadbeef",
            "meta": {
                "uploadedBy": "user-1",
                "createdAt": "2023-04-30T02:08:15Z",
                "updatedAt": "2023-04-30T02:08:15Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MoneriumClient::with_api_base_url(server.uri());
    let doc = client
        .upload_supporting_document(&json!({
            "name": "invoice.pdf",
            "type": "application/pdf",
        }))
        .await
        .expect("document uploaded");
    assert_eq!(doc.id, "doc-1");
    assert_eq!(doc.size, 1024);
}

/// Unauthenticated calls still go out (with an empty Authorization
/// header); the server's 401 payload comes back verbatim.
#[tokio::test]
async fn unauthenticated_call_surfaces_401_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tokens"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "unauthorized"})))
        .mount(&server)
        .await;

    let client = MoneriumClient::with_api_base_url(server.uri());
    let err = client.tokens().await.expect_err("401 must fail");
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, json!({"message": "unauthorized"}));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

/// A body that is not JSON is a malformed response, never silently
/// swallowed.
#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tokens"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"<html>gateway</html>".to_vec(), "text/html"),
        )
        .mount(&server)
        .await;

    let client = MoneriumClient::with_api_base_url(server.uri());
    let err = client.tokens().await.expect_err("must fail");
    assert!(matches!(err, Error::MalformedResponse(_)));
}
