use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Months, NaiveDate};
use serde_json::Value;

use crate::registration::domain::{CandidateRegistration, Client, ClientId, ClientTier, User};
use crate::registration::ports::{
    ClientDirectory, CreditScorer, DirectoryError, FixedClock, ScoringError, StoreError, UserStore,
};
use crate::registration::{registration_router, RegistrationPolicy, UserRegistrationService};

pub(super) const NORMAL_CLIENT: ClientId = ClientId(1);
pub(super) const IMPORTANT_CLIENT: ClientId = ClientId(2);
pub(super) const VERY_IMPORTANT_CLIENT: ClientId = ClientId(3);
pub(super) const UNRECOGNIZED_CLIENT: ClientId = ClientId(4);
pub(super) const MISSING_CLIENT: ClientId = ClientId(99);

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn years_ago(years: u32) -> NaiveDate {
    today()
        .checked_sub_months(Months::new(years * 12))
        .expect("valid birth date")
}

pub(super) fn candidate(client_id: ClientId) -> CandidateRegistration {
    CandidateRegistration {
        first_name: "Anna".to_string(),
        last_name: "Ator".to_string(),
        email: "a@b.com".to_string(),
        date_of_birth: years_ago(22),
        client_id,
    }
}

pub(super) type TestService =
    UserRegistrationService<RecordingDirectory, ScriptedScorer, MemoryStore>;

pub(super) fn build_service(
    base_limit: i64,
) -> (
    TestService,
    Arc<RecordingDirectory>,
    Arc<ScriptedScorer>,
    Arc<MemoryStore>,
) {
    let directory = Arc::new(RecordingDirectory::seeded());
    let scorer = Arc::new(ScriptedScorer::returning(base_limit));
    let store = Arc::new(MemoryStore::default());
    let service = UserRegistrationService::with_clock(
        directory.clone(),
        scorer.clone(),
        store.clone(),
        RegistrationPolicy::default(),
        Arc::new(FixedClock(today())),
    );
    (service, directory, scorer, store)
}

pub(super) struct RecordingDirectory {
    clients: HashMap<ClientId, Client>,
    lookups: AtomicUsize,
}

impl RecordingDirectory {
    pub(super) fn seeded() -> Self {
        let clients = [
            (NORMAL_CLIENT, "Kowalski", ClientTier::Normal),
            (IMPORTANT_CLIENT, "Malewski", ClientTier::Important),
            (VERY_IMPORTANT_CLIENT, "Smith", ClientTier::VeryImportant),
            (
                UNRECOGNIZED_CLIENT,
                "Doe",
                ClientTier::Unrecognized("PlatinumClient".to_string()),
            ),
        ]
        .into_iter()
        .map(|(id, name, tier)| {
            (
                id,
                Client {
                    id,
                    name: name.to_string(),
                    tier,
                },
            )
        })
        .collect();

        Self {
            clients,
            lookups: AtomicUsize::new(0),
        }
    }

    pub(super) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ClientDirectory for RecordingDirectory {
    fn fetch(&self, id: ClientId) -> Result<Option<Client>, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.clients.get(&id).cloned())
    }
}

pub(super) struct ScriptedScorer {
    base_limit: i64,
    requests: Mutex<Vec<(String, NaiveDate)>>,
}

impl ScriptedScorer {
    pub(super) fn returning(base_limit: i64) -> Self {
        Self {
            base_limit,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<(String, NaiveDate)> {
        self.requests.lock().expect("scorer mutex poisoned").clone()
    }
}

impl CreditScorer for ScriptedScorer {
    fn credit_limit(
        &self,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, ScoringError> {
        self.requests
            .lock()
            .expect("scorer mutex poisoned")
            .push((last_name.to_string(), date_of_birth));
        Ok(self.base_limit)
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub(super) fn users(&self) -> Vec<User> {
        self.users.lock().expect("store mutex poisoned").clone()
    }
}

impl UserStore for MemoryStore {
    fn insert(&self, user: User) -> Result<(), StoreError> {
        self.users.lock().expect("store mutex poisoned").push(user);
        Ok(())
    }
}

pub(super) struct UnavailableDirectory;

impl ClientDirectory for UnavailableDirectory {
    fn fetch(&self, _id: ClientId) -> Result<Option<Client>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) struct UnavailableScorer;

impl CreditScorer for UnavailableScorer {
    fn credit_limit(
        &self,
        _last_name: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<i64, ScoringError> {
        Err(ScoringError::Unavailable("scoring timeout".to_string()))
    }
}

pub(super) struct UnavailableStore;

impl UserStore for UnavailableStore {
    fn insert(&self, _user: User) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ConflictStore;

impl UserStore for ConflictStore {
    fn insert(&self, user: User) -> Result<(), StoreError> {
        Err(StoreError::Conflict(user.email_address))
    }
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    registration_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
