use crate::infra::{InMemoryClientDirectory, InMemoryUserStore, TableCreditScorer};
use chrono::{Local, Months, NaiveDate};
use clap::Args;
use std::sync::Arc;
use user_onboarding::config::AppConfig;
use user_onboarding::error::AppError;
use user_onboarding::registration::{
    CandidateRegistration, ClientId, FixedClock, RegistrationDecision, RegistrationPolicy,
    UserRegistrationService,
};

type DemoService =
    UserRegistrationService<InMemoryClientDirectory, TableCreditScorer, InMemoryUserStore>;

#[derive(Args, Debug)]
pub(crate) struct RegisterArgs {
    /// Given name of the user
    #[arg(long)]
    pub(crate) first_name: String,
    /// Family name of the user (also sent to the credit scorer)
    #[arg(long)]
    pub(crate) last_name: String,
    /// Contact email address
    #[arg(long)]
    pub(crate) email: String,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date_of_birth: NaiveDate,
    /// Identifier of the owning client (1-4 in the demo directory)
    #[arg(long)]
    pub(crate) client_id: i32,
    /// Evaluate the age gate as of this date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluate the age gate as of this date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn demo_service(policy: RegistrationPolicy, today: NaiveDate) -> (DemoService, InMemoryUserStore) {
    let store = InMemoryUserStore::default();
    let service = UserRegistrationService::with_clock(
        Arc::new(InMemoryClientDirectory::seeded()),
        Arc::new(TableCreditScorer::seeded()),
        Arc::new(store.clone()),
        policy,
        Arc::new(FixedClock(today)),
    );
    (service, store)
}

pub(crate) fn run_register(args: RegisterArgs) -> Result<(), AppError> {
    let RegisterArgs {
        first_name,
        last_name,
        email,
        date_of_birth,
        client_id,
        today,
    } = args;

    let policy = AppConfig::load()?.registration;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let (service, _) = demo_service(policy, today);

    let decision = service.register(CandidateRegistration {
        first_name,
        last_name,
        email,
        date_of_birth,
        client_id: ClientId(client_id),
    })?;

    println!("Registration evaluated {}", today);
    println!("- {}", decision.summary());
    if let RegistrationDecision::Registered(user) = &decision {
        match serde_json::to_string_pretty(&user.view()) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("  User payload unavailable: {}", err),
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let policy = AppConfig::load()?.registration;

    println!("User onboarding demo (evaluated {})", today);
    println!(
        "Policy: minimum age {}, credit threshold {}, important multiplier x{}",
        policy.minimum_age, policy.minimum_credit_limit, policy.important_client_multiplier
    );

    let (service, store) = demo_service(policy, today);
    for (label, candidate) in demo_candidates(today) {
        match service.register(candidate) {
            Ok(decision) => println!("- {label}: {}", decision.summary()),
            Err(err) => println!("- {label}: fault ({err})"),
        }
    }

    let users = store.users();
    println!("\nStored users: {}", users.len());
    for user in users {
        println!(
            "- {} {} <{}> client {} ({}), credit limit {}",
            user.first_name,
            user.last_name,
            user.email_address,
            user.client.id,
            user.client.tier,
            user.credit_limit()
                .map(|limit| limit.to_string())
                .unwrap_or_else(|| "none".to_string())
        );
    }

    Ok(())
}

fn born_years_ago(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

fn demo_candidates(today: NaiveDate) -> Vec<(&'static str, CandidateRegistration)> {
    let candidate = |first: &str, last: &str, email: &str, years: u32, client: i32| {
        CandidateRegistration {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            date_of_birth: born_years_ago(today, years),
            client_id: ClientId(client),
        }
    };

    vec![
        (
            "standard client, default score",
            candidate("Anna", "Ator", "anna@ator.pl", 22, 1),
        ),
        (
            "standard client, low score",
            candidate("Jan", "Kwiatkowski", "jan@kwiatkowski.pl", 35, 1),
        ),
        (
            "important client, doubled score",
            candidate("Ewa", "Nowak", "ewa@nowak.pl", 40, 2),
        ),
        (
            "very important client, no limit",
            candidate("John", "Smith", "john@smith.com", 50, 3),
        ),
        (
            "unrecognized tier, standard policy",
            candidate("Piotr", "Andrzejewicz", "piotr@andrzejewicz.pl", 28, 4),
        ),
        (
            "underage candidate",
            candidate("Ola", "Malewska", "ola@malewska.pl", 20, 2),
        ),
        (
            "malformed email",
            candidate("Adam", "Kowal", "adam-at-kowal", 30, 1),
        ),
        (
            "unknown client",
            candidate("Maria", "Lis", "maria@lis.pl", 33, 42),
        ),
    ]
}
