use serde::{Deserialize, Serialize};

/// Thresholds and multipliers applied by the registration gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPolicy {
    pub minimum_age: u32,
    pub minimum_credit_limit: i64,
    pub important_client_multiplier: i64,
    pub standard_client_multiplier: i64,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            minimum_age: 21,
            minimum_credit_limit: 500,
            important_client_multiplier: 2,
            standard_client_multiplier: 1,
        }
    }
}
