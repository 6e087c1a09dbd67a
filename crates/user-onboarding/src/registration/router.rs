use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::CandidateRegistration;
use super::policy::RegistrationDecision;
use super::ports::{ClientDirectory, CreditScorer, StoreError, UserStore};
use super::service::{RegistrationError, UserRegistrationService};

/// Router builder exposing the registration endpoint.
pub fn registration_router<D, S, U>(service: Arc<UserRegistrationService<D, S, U>>) -> Router
where
    D: ClientDirectory + 'static,
    S: CreditScorer + 'static,
    U: UserStore + 'static,
{
    Router::new()
        .route("/api/v1/users", post(register_handler::<D, S, U>))
        .with_state(service)
}

pub(crate) async fn register_handler<D, S, U>(
    State(service): State<Arc<UserRegistrationService<D, S, U>>>,
    payload: Result<axum::Json<CandidateRegistration>, JsonRejection>,
) -> Response
where
    D: ClientDirectory + 'static,
    S: CreditScorer + 'static,
    U: UserStore + 'static,
{
    let candidate = match payload {
        Ok(axum::Json(candidate)) => candidate,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.register(candidate) {
        Ok(RegistrationDecision::Registered(user)) => {
            (StatusCode::CREATED, axum::Json(user.view())).into_response()
        }
        Ok(RegistrationDecision::Rejected(reason)) => {
            let payload = json!({
                "registered": false,
                "reason": reason,
                "error": reason.summary(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RegistrationError::ClientNotFound(client_id)) => {
            let payload = json!({
                "error": format!("client {client_id} not found"),
                "client_id": client_id,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(RegistrationError::Store(StoreError::Conflict(email))) => {
            let payload = json!({
                "error": format!("user already exists: {email}"),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "registration collaborator fault");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
