use chrono::{Local, NaiveDate};

use super::domain::{Client, ClientId, User};

/// Lookup abstraction over wherever client records live.
pub trait ClientDirectory: Send + Sync {
    fn fetch(&self, id: ClientId) -> Result<Option<Client>, DirectoryError>;
}

/// Opaque scoring service producing a base credit limit from identity attributes.
pub trait CreditScorer: Send + Sync {
    fn credit_limit(&self, last_name: &str, date_of_birth: NaiveDate)
        -> Result<i64, ScoringError>;
}

/// Sink receiving users that cleared every registration gate.
pub trait UserStore: Send + Sync {
    fn insert(&self, user: User) -> Result<(), StoreError>;
}

/// Source of the current calendar date for the age gate.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the host's local date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pins "today" to a given date; used for demos and deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("client directory unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("credit scorer unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user already exists: {0}")]
    Conflict(String),
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}
