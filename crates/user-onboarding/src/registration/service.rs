use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{CandidateRegistration, ClientId, ClientTier, CreditLimit, User};
use super::policy::{RegistrationDecision, RegistrationPolicy, RegistrationRules};
use super::ports::{
    Clock, ClientDirectory, CreditScorer, DirectoryError, ScoringError, StoreError, SystemClock,
    UserStore,
};

/// Service composing the registration rules with the injected collaborators.
pub struct UserRegistrationService<D, S, U> {
    directory: Arc<D>,
    scorer: Arc<S>,
    store: Arc<U>,
    clock: Arc<dyn Clock>,
    rules: RegistrationRules,
}

impl<D, S, U> UserRegistrationService<D, S, U>
where
    D: ClientDirectory + 'static,
    S: CreditScorer + 'static,
    U: UserStore + 'static,
{
    pub fn new(
        directory: Arc<D>,
        scorer: Arc<S>,
        store: Arc<U>,
        policy: RegistrationPolicy,
    ) -> Self {
        Self::with_clock(directory, scorer, store, policy, Arc::new(SystemClock))
    }

    pub fn with_clock(
        directory: Arc<D>,
        scorer: Arc<S>,
        store: Arc<U>,
        policy: RegistrationPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            scorer,
            store,
            clock,
            rules: RegistrationRules::new(policy),
        }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        self.rules.policy()
    }

    /// Run a candidate through every gate, persisting the user only when all pass.
    ///
    /// Business rejections come back as [`RegistrationDecision::Rejected`];
    /// collaborator faults (including an unknown client) are returned as errors.
    pub fn register(
        &self,
        candidate: CandidateRegistration,
    ) -> Result<RegistrationDecision, RegistrationError> {
        let client_id = candidate.client_id;

        if let Err(reason) = self.rules.screen(&candidate, self.clock.today()) {
            debug!(%client_id, reason = %reason.summary(), "candidate screened out");
            return Ok(RegistrationDecision::Rejected(reason));
        }

        let client = self
            .directory
            .fetch(client_id)?
            .ok_or(RegistrationError::ClientNotFound(client_id))?;

        let credit = match self.rules.credit_multiplier(&client.tier) {
            None => CreditLimit::Unlimited,
            Some(multiplier) => {
                if let ClientTier::Unrecognized(label) = &client.tier {
                    warn!(
                        %client_id,
                        tier = %label,
                        "unrecognized client tier, applying standard credit policy"
                    );
                }
                let base_limit = self
                    .scorer
                    .credit_limit(&candidate.last_name, candidate.date_of_birth)?;
                debug!(%client_id, base_limit, multiplier, "credit limit scored");
                self.rules.apply_multiplier(base_limit, multiplier)
            }
        };

        if let Err(reason) = self.rules.check_threshold(credit) {
            debug!(%client_id, reason = %reason.summary(), "credit threshold not met");
            return Ok(RegistrationDecision::Rejected(reason));
        }

        let user = User::new(candidate, client, credit);
        self.store.insert(user.clone())?;
        info!(
            %client_id,
            tier = %user.client.tier,
            credit_limit = ?user.credit_limit(),
            "user registered"
        );

        Ok(RegistrationDecision::Registered(user))
    }
}

/// Collaborator faults, kept apart from business rejections.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("client {0} not found")]
    ClientNotFound(ClientId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
