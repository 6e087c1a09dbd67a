//! User registration: input and age screening, tier-driven credit limits, and the
//! threshold gate guarding persistence.

pub mod domain;
pub(crate) mod policy;
pub mod ports;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CandidateRegistration, Client, ClientId, ClientTier, CreditLimit, User, UserView,
};
pub use policy::{
    age_on, InputDefect, RegistrationDecision, RegistrationPolicy, RegistrationRules,
    RejectionReason,
};
pub use ports::{
    Clock, ClientDirectory, CreditScorer, DirectoryError, FixedClock, ScoringError, StoreError,
    SystemClock, UserStore,
};
pub use router::registration_router;
pub use service::{RegistrationError, UserRegistrationService};
