use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for clients owned by the client directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller supplied registration data, consumed to build a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
}

/// Classification controlling which credit policy applies to a client's users.
///
/// Labels outside the known set are kept verbatim in [`ClientTier::Unrecognized`] so
/// they stay visible in logs instead of collapsing into the standard tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientTier {
    VeryImportant,
    Important,
    Normal,
    Unrecognized(String),
}

impl ClientTier {
    pub fn label(&self) -> &str {
        match self {
            ClientTier::VeryImportant => "VeryImportantClient",
            ClientTier::Important => "ImportantClient",
            ClientTier::Normal => "NormalClient",
            ClientTier::Unrecognized(label) => label.as_str(),
        }
    }
}

impl From<&str> for ClientTier {
    fn from(value: &str) -> Self {
        match value {
            "VeryImportantClient" => ClientTier::VeryImportant,
            "ImportantClient" => ClientTier::Important,
            "NormalClient" => ClientTier::Normal,
            other => ClientTier::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ClientTier {
    fn from(value: String) -> Self {
        ClientTier::from(value.as_str())
    }
}

impl From<ClientTier> for String {
    fn from(value: ClientTier) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for ClientTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Client record as returned by the directory. Read-only to the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub tier: ClientTier,
}

/// Credit limit attached to a user; the amount exists only when a limit applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum CreditLimit {
    Unlimited,
    Limited(i64),
}

/// Account built by the registration flow and handed to the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub credit: CreditLimit,
}

impl User {
    pub fn new(candidate: CandidateRegistration, client: Client, credit: CreditLimit) -> Self {
        Self {
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email_address: candidate.email,
            date_of_birth: candidate.date_of_birth,
            client,
            credit,
        }
    }

    pub fn has_credit_limit(&self) -> bool {
        matches!(self.credit, CreditLimit::Limited(_))
    }

    pub fn credit_limit(&self) -> Option<i64> {
        match self.credit {
            CreditLimit::Limited(amount) => Some(amount),
            CreditLimit::Unlimited => None,
        }
    }

    pub fn view(&self) -> UserView {
        UserView {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_address: self.email_address.clone(),
            date_of_birth: self.date_of_birth,
            client_id: self.client.id,
            client_tier: self.client.tier.label().to_string(),
            has_credit_limit: self.has_credit_limit(),
            credit_limit: self.credit_limit(),
        }
    }
}

/// Flattened representation of a registered user for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
    pub client_tier: String,
    pub has_credit_limit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<i64>,
}
