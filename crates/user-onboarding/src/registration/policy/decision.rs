use serde::{Deserialize, Serialize};

use super::super::domain::User;

/// Business outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationDecision {
    Registered(User),
    Rejected(RejectionReason),
}

impl RegistrationDecision {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationDecision::Registered(_))
    }

    pub fn summary(&self) -> String {
        match self {
            RegistrationDecision::Registered(user) => match user.credit_limit() {
                Some(limit) => format!("registered with credit limit {limit}"),
                None => "registered without credit limit".to_string(),
            },
            RegistrationDecision::Rejected(reason) => reason.summary(),
        }
    }
}

/// Gate that stopped a registration. Informational only; callers that need a
/// yes/no answer use [`RegistrationDecision::is_registered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidInput { defect: InputDefect },
    Underage { age: i32, minimum_age: u32 },
    CreditLimitBelowThreshold { credit_limit: i64, threshold: i64 },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::InvalidInput { defect } => {
                format!("rejected for invalid input: {}", defect.summary())
            }
            RejectionReason::Underage { age, minimum_age } => {
                format!("rejected as underage ({age} < {minimum_age})")
            }
            RejectionReason::CreditLimitBelowThreshold {
                credit_limit,
                threshold,
            } => format!("rejected for credit limit {credit_limit} below {threshold}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDefect {
    MissingFirstName,
    MissingLastName,
    MalformedEmail,
}

impl InputDefect {
    pub const fn summary(self) -> &'static str {
        match self {
            InputDefect::MissingFirstName => "first name is empty",
            InputDefect::MissingLastName => "last name is empty",
            InputDefect::MalformedEmail => "email must contain '@' and '.'",
        }
    }
}
