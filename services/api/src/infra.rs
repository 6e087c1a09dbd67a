use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use user_onboarding::registration::{
    Client, ClientDirectory, ClientId, ClientTier, CreditScorer, DirectoryError, ScoringError,
    StoreError, User, UserStore,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Client directory backed by a fixed table of demo clients.
#[derive(Clone)]
pub(crate) struct InMemoryClientDirectory {
    clients: Arc<HashMap<ClientId, Client>>,
}

impl InMemoryClientDirectory {
    pub(crate) fn seeded() -> Self {
        let clients = [
            (1, "Kowalski", "NormalClient"),
            (2, "Malewski", "ImportantClient"),
            (3, "Smith", "VeryImportantClient"),
            (4, "Doe", "PlatinumClient"),
        ]
        .into_iter()
        .map(|(id, name, tier)| {
            let id = ClientId(id);
            let client = Client {
                id,
                name: name.to_string(),
                tier: ClientTier::from(tier),
            };
            (id, client)
        })
        .collect();

        Self {
            clients: Arc::new(clients),
        }
    }

    pub(crate) fn clients(&self) -> Vec<Client> {
        let mut clients: Vec<Client> = self.clients.values().cloned().collect();
        clients.sort_by_key(|client| client.id);
        clients
    }
}

impl ClientDirectory for InMemoryClientDirectory {
    fn fetch(&self, id: ClientId) -> Result<Option<Client>, DirectoryError> {
        Ok(self.clients.get(&id).cloned())
    }
}

/// Scorer returning a per-last-name base limit, falling back to a default.
#[derive(Clone)]
pub(crate) struct TableCreditScorer {
    limits: HashMap<String, i64>,
    default_limit: i64,
}

impl TableCreditScorer {
    pub(crate) fn seeded() -> Self {
        let limits = [("Kwiatkowski", 200), ("Nowak", 300), ("Andrzejewicz", 499)]
            .into_iter()
            .map(|(name, limit)| (name.to_string(), limit))
            .collect();
        Self {
            limits,
            default_limit: 10_000,
        }
    }
}

impl CreditScorer for TableCreditScorer {
    fn credit_limit(
        &self,
        last_name: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<i64, ScoringError> {
        Ok(self
            .limits
            .get(last_name)
            .copied()
            .unwrap_or(self.default_limit))
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut guard = self.users.lock().expect("user store mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.email_address == user.email_address)
        {
            return Err(StoreError::Conflict(user.email_address));
        }
        guard.push(user);
        Ok(())
    }
}

impl InMemoryUserStore {
    pub(crate) fn users(&self) -> Vec<User> {
        self.users.lock().expect("user store mutex poisoned").clone()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
