mod config;
mod decision;
mod rules;

pub use config::RegistrationPolicy;
pub use decision::{InputDefect, RegistrationDecision, RejectionReason};
pub use rules::age_on;

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{CandidateRegistration, ClientTier, CreditLimit};

/// Stateless gatekeeper applying a [`RegistrationPolicy`] to candidates.
#[derive(Debug, Clone)]
pub struct RegistrationRules {
    policy: RegistrationPolicy,
}

impl RegistrationRules {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Input validity followed by the age gate. Touches no collaborator.
    pub fn screen(
        &self,
        candidate: &CandidateRegistration,
        today: NaiveDate,
    ) -> Result<(), RejectionReason> {
        rules::validate_input(candidate)
            .map_err(|defect| RejectionReason::InvalidInput { defect })?;

        let age = age_on(candidate.date_of_birth, today);
        debug!(age, minimum_age = self.policy.minimum_age, "age computed");
        if i64::from(age) < i64::from(self.policy.minimum_age) {
            return Err(RejectionReason::Underage {
                age,
                minimum_age: self.policy.minimum_age,
            });
        }
        Ok(())
    }

    pub fn credit_multiplier(&self, tier: &ClientTier) -> Option<i64> {
        rules::credit_multiplier(tier, &self.policy)
    }

    /// Scale a base limit by the tier multiplier, saturating at the integer bounds.
    pub fn apply_multiplier(&self, base_limit: i64, multiplier: i64) -> CreditLimit {
        CreditLimit::Limited(base_limit.saturating_mul(multiplier))
    }

    pub fn check_threshold(&self, credit: CreditLimit) -> Result<(), RejectionReason> {
        match credit {
            CreditLimit::Limited(credit_limit) if credit_limit < self.policy.minimum_credit_limit => {
                Err(RejectionReason::CreditLimitBelowThreshold {
                    credit_limit,
                    threshold: self.policy.minimum_credit_limit,
                })
            }
            CreditLimit::Limited(_) | CreditLimit::Unlimited => Ok(()),
        }
    }
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self::new(RegistrationPolicy::default())
    }
}
