//! Wire data model for the Monerium REST API
//!
//! Field names and casing follow the API exactly (`userId`, `accountId`,
//! lowercase enum values); serde renames keep the Rust side idiomatic.
//! These are plain schemas with no behavior of their own.

use serde::{Deserialize, Serialize};

// --- currencies, chains, networks ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Isk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Polygon,
    Ethereum,
    Gnosis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Chiado,
    Goerli,
    Mumbai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStandard {
    Iban,
    Scan,
}

// --- auth ---

/// Full token-exchange response: the live session credential.
///
/// Owned by the client session and replaced wholesale on each successful
/// authentication; `expires_in` is a delta in seconds from response time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerProfile {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub profile: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Password,
    Resource,
    Jwt,
    #[serde(rename = "apiKey")]
    ApiKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Corporate,
    Personal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSubject {
    pub method: AuthMethod,
    pub subject: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProfile {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ProfileType,
    pub name: String,
    pub perms: Vec<Permission>,
}

/// Who the current bearer token acts as: `GET auth/context`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub auth: AuthSubject,
    pub default_profile: String,
    pub profiles: Vec<AuthProfile>,
}

// --- profiles ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycState {
    Absent,
    Submitted,
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycOutcome {
    Approved,
    Rejected,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kyc {
    pub state: KycState,
    pub outcome: KycOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub currency: Currency,
    pub standard: PaymentStandard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    pub network: Network,
    pub chain: Chain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// `GET profiles/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub kyc: Kyc,
    pub accounts: Vec<Account>,
}

// --- balances ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub currency: Currency,
    pub amount: String,
}

/// Per-account balance set: `GET balances` / `GET profiles/{id}/balances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balances {
    pub id: String,
    pub address: String,
    pub chain: Chain,
    pub network: Network,
    pub balances: Vec<Balance>,
}

// --- orders ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Redeem,
    Issue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Placed,
    Pending,
    Processed,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub provider: String,
    pub currency: Currency,
    pub amount: String,
}

/// Bank identifier of the fiat counterpart, tagged by payment standard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "standard", rename_all = "lowercase")]
pub enum PaymentIdentifier {
    Iban {
        iban: String,
    },
    Scan {
        #[serde(rename = "sortCode")]
        sort_code: String,
        #[serde(rename = "accountNumber")]
        account_number: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CounterpartDetails {
    Individual {
        #[serde(rename = "firstName")]
        first_name: String,
        #[serde(rename = "lastName")]
        last_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        country: Option<String>,
    },
    Corporation {
        #[serde(rename = "companyName")]
        company_name: String,
        country: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterpart {
    pub identifier: PaymentIdentifier,
    pub details: CounterpartDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadata {
    pub approved_at: String,
    pub processed_at: String,
    pub rejected_at: String,
    pub state: OrderState,
    pub placed_by: String,
    pub placed_at: String,
    pub received_amount: String,
    pub sent_amount: String,
}

/// `GET orders` / `GET orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub profile: String,
    pub account_id: String,
    pub address: String,
    pub kind: OrderKind,
    pub amount: String,
    pub currency: Currency,
    pub total_fee: String,
    pub fees: Vec<Fee>,
    pub counterpart: Counterpart,
    pub memo: String,
    pub rejected_reason: String,
    pub supporting_document_id: String,
    pub meta: OrderMetadata,
}

/// Query filters for `GET orders`. Unset fields are omitted from the
/// query string.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub address: Option<String>,
    pub tx_hash: Option<String>,
    pub profile: Option<String>,
    pub memo: Option<String>,
    pub account_id: Option<String>,
    pub state: Option<OrderState>,
}

/// Body for `POST [profiles/{id}/]orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub kind: OrderKind,
    pub amount: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub address: String,
    pub currency: Currency,
    pub counterpart: Counterpart,
    pub message: String,
    pub memo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_document_id: Option<String>,
    pub chain: Chain,
    pub network: Network,
}

// --- tokens ---

/// On-chain e-money token listing: `GET tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub currency: Currency,
    pub ticker: String,
    pub symbol: String,
    pub chain: Chain,
    pub network: Network,
    pub address: String,
    pub decimals: u32,
}

// --- address linking ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyAccounts {
    pub network: Network,
    pub chain: Chain,
    pub currency: Currency,
}

/// Body for `POST profiles/{id}/addresses`: link a signed wallet address
/// to a profile.
#[derive(Debug, Clone, Serialize)]
pub struct LinkAddress {
    pub address: String,
    pub message: String,
    pub signature: String,
    pub accounts: Vec<CurrencyAccounts>,
}

// --- supporting documents ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingDocMetadata {
    pub uploaded_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// `POST files/supporting-document` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportingDoc {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub hash: String,
    pub meta: SupportingDocMetadata,
}
