use chrono::{Datelike, NaiveDate};

use super::super::domain::{CandidateRegistration, ClientTier};
use super::config::RegistrationPolicy;
use super::decision::InputDefect;

/// Syntactic checks only: names must be non-empty and the email must contain
/// at least one `@` and one `.`, in any order.
pub(crate) fn validate_input(candidate: &CandidateRegistration) -> Result<(), InputDefect> {
    if candidate.first_name.is_empty() {
        return Err(InputDefect::MissingFirstName);
    }
    if candidate.last_name.is_empty() {
        return Err(InputDefect::MissingLastName);
    }
    if !candidate.email.contains('@') || !candidate.email.contains('.') {
        return Err(InputDefect::MalformedEmail);
    }
    Ok(())
}

/// Whole years between `date_of_birth` and `today`, counting a year only once
/// the birthday has been reached in the current calendar year.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Multiplier applied to the scorer's base limit, or `None` when the tier
/// carries no credit limit at all.
pub(crate) fn credit_multiplier(tier: &ClientTier, policy: &RegistrationPolicy) -> Option<i64> {
    match tier {
        ClientTier::VeryImportant => None,
        ClientTier::Important => Some(policy.important_client_multiplier),
        ClientTier::Normal => Some(policy.standard_client_multiplier),
        ClientTier::Unrecognized(_) => Some(policy.standard_client_multiplier),
    }
}
