use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use crate::localization::Language;

use super::super::catalog::OpportunityId;
use super::super::ranking::RankingGateway;
use super::super::results::FeedbackSignal;
use super::domain::{PersonalProfile, PreferenceProfile, SessionId, WizardSession};
use super::service::{MatchWizardService, WizardError};
use super::store::{SessionStore, SessionStoreError};
use super::views::SessionView;

/// Router builder exposing the wizard over HTTP. One route per operation;
/// every success renders the refreshed session snapshot except feedback,
/// which answers with its acknowledgement.
pub fn wizard_router<S, G>(service: Arc<MatchWizardService<S, G>>) -> Router
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    Router::new()
        .route("/api/v1/wizard/sessions", post(open_handler::<S, G>))
        .route(
            "/api/v1/wizard/sessions/:session_id",
            get(session_handler::<S, G>),
        )
        .route(
            "/api/v1/wizard/sessions/:session_id/language",
            post(language_handler::<S, G>),
        )
        .route(
            "/api/v1/wizard/sessions/:session_id/personal",
            post(personal_handler::<S, G>),
        )
        .route(
            "/api/v1/wizard/sessions/:session_id/preferences",
            post(preferences_handler::<S, G>),
        )
        .route(
            "/api/v1/wizard/sessions/:session_id/feedback",
            post(feedback_handler::<S, G>),
        )
        .route(
            "/api/v1/wizard/sessions/:session_id/view",
            post(view_handler::<S, G>),
        )
        .route(
            "/api/v1/wizard/sessions/:session_id/edit",
            post(edit_handler::<S, G>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageRequest {
    language: Language,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreferencesRequest {
    #[serde(flatten)]
    preferences: PreferenceProfile,
    #[serde(default)]
    best_match_only: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedbackRequest {
    opportunity_id: u32,
    signal: FeedbackSignal,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewRequest {
    #[serde(default)]
    best_match_only: Option<bool>,
    #[serde(default)]
    show_all_others: Option<bool>,
}

pub(crate) async fn open_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.open_session() {
        Ok(session) => session_response(StatusCode::CREATED, &session),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.session(&SessionId(session_id)) {
        Ok(session) => session_response(StatusCode::OK, &session),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn language_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<LanguageRequest>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.choose_language(&SessionId(session_id), request.language) {
        Ok(session) => session_response(StatusCode::OK, &session),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn personal_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
    axum::Json(profile): axum::Json<PersonalProfile>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.submit_personal(&SessionId(session_id), profile, today()) {
        Ok(session) => session_response(StatusCode::OK, &session),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preferences_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<PreferencesRequest>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service
        .submit_preferences(
            &SessionId(session_id),
            request.preferences,
            request.best_match_only,
        )
        .await
    {
        Ok(session) => session_response(StatusCode::OK, &session),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn feedback_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<FeedbackRequest>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.record_feedback(
        &SessionId(session_id),
        OpportunityId(request.opportunity_id),
        request.signal,
    ) {
        Ok(ack) => (StatusCode::OK, axum::Json(ack)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn view_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<ViewRequest>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.set_view_options(
        &SessionId(session_id),
        request.best_match_only,
        request.show_all_others,
    ) {
        Ok(session) => session_response(StatusCode::OK, &session),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn edit_handler<S, G>(
    State(service): State<Arc<MatchWizardService<S, G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    match service.edit_preferences(&SessionId(session_id)) {
        Ok(session) => session_response(StatusCode::OK, &session),
        Err(error) => error_response(error),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn session_response(status: StatusCode, session: &WizardSession) -> Response {
    let view = SessionView::from_session(session, today());
    (status, axum::Json(view)).into_response()
}

fn error_response(error: WizardError) -> Response {
    let status = match &error {
        WizardError::Ineligible { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        WizardError::StageMismatch { .. } | WizardError::RankingInFlight => StatusCode::CONFLICT,
        WizardError::Store(SessionStoreError::NotFound) => StatusCode::NOT_FOUND,
        WizardError::Store(SessionStoreError::Conflict) => StatusCode::CONFLICT,
        WizardError::Store(SessionStoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
