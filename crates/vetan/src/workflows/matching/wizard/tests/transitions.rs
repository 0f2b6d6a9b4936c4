use super::common::*;
use crate::localization::{translate, Language};
use crate::workflows::matching::catalog::OpportunityId;
use crate::workflows::matching::results::{FeedbackSignal, ResultsPhase};
use crate::workflows::matching::wizard::domain::{SessionId, Stage};
use crate::workflows::matching::wizard::service::WizardError;
use crate::workflows::matching::wizard::store::SessionStoreError;

#[test]
fn open_session_starts_at_language_with_the_standard_prefill() {
    let (service, _store) = build_service(FailingGateway);

    let session = service.open_session().expect("open session");

    assert!(matches!(session.stage, Stage::LanguageSelect));
    assert_eq!(session.language, Language::En);
    assert!(session.personal.is_none());
    assert_eq!(session.preferences.education, "12th Pass");
    assert_eq!(session.preferences.location, "Rural Rajasthan");
    assert_eq!(
        session.preferences.skills_line(),
        "Basic computer skills, good communication"
    );
    assert!(session.id.0.starts_with("session-"));
}

#[test]
fn opened_sessions_get_distinct_ids() {
    let (service, _store) = build_service(FailingGateway);

    let first = service.open_session().expect("open first");
    let second = service.open_session().expect("open second");

    assert_ne!(first.id, second.id);
}

#[test]
fn language_pick_advances_to_the_personal_step() {
    let (service, _store) = build_service(FailingGateway);
    let id = service.open_session().expect("open session").id;

    let session = service
        .choose_language(&id, Language::Ta)
        .expect("choose language");

    assert_eq!(session.language, Language::Ta);
    assert!(matches!(session.stage, Stage::PersonalProfile));
}

#[test]
fn language_cannot_be_changed_after_the_pick() {
    let (service, _store) = build_service(FailingGateway);
    let id = service.open_session().expect("open session").id;
    service
        .choose_language(&id, Language::Hi)
        .expect("choose language");

    match service.choose_language(&id, Language::En) {
        Err(WizardError::StageMismatch { expected, actual }) => {
            assert_eq!(expected, "language_select");
            assert_eq!(actual, "personal_profile");
        }
        other => panic!("expected stage mismatch, got {other:?}"),
    }
    let session = service.session(&id).expect("fetch session");
    assert_eq!(session.language, Language::Hi);
}

#[test]
fn personal_step_requires_the_language_pick_first() {
    let (service, _store) = build_service(FailingGateway);
    let id = service.open_session().expect("open session").id;

    match service.submit_personal(&id, personal(), as_of()) {
        Err(WizardError::StageMismatch { expected, actual }) => {
            assert_eq!(expected, "personal_profile");
            assert_eq!(actual, "language_select");
        }
        other => panic!("expected stage mismatch, got {other:?}"),
    }
}

#[test]
fn twenty_first_birthday_is_eligible_that_day() {
    let (service, _store) = build_service(FailingGateway);
    let id = service.open_session().expect("open session").id;
    service
        .choose_language(&id, Language::En)
        .expect("choose language");

    let mut profile = personal();
    profile.date_of_birth = ymd(2005, 8, 1);

    let session = service
        .submit_personal(&id, profile, ymd(2026, 8, 1))
        .expect("21st birthday should pass the gate");
    assert!(matches!(session.stage, Stage::PreferenceProfile));
    assert!(session.personal.is_some());
}

#[test]
fn under_age_applicant_is_refused_in_the_session_language() {
    let (service, _store) = build_service(FailingGateway);
    let id = service.open_session().expect("open session").id;
    service
        .choose_language(&id, Language::Hi)
        .expect("choose language");

    let mut profile = personal();
    profile.date_of_birth = ymd(2005, 8, 1);

    match service.submit_personal(&id, profile, ymd(2026, 7, 31)) {
        Err(WizardError::Ineligible { message }) => {
            assert_eq!(message, translate(Language::Hi, "ageValidationError"));
        }
        other => panic!("expected ineligible, got {other:?}"),
    }

    // The refusal leaves the session where it was.
    let session = service.session(&id).expect("fetch session");
    assert!(matches!(session.stage, Stage::PersonalProfile));
    assert!(session.personal.is_none());
}

#[tokio::test]
async fn preference_step_requires_personal_details_first() {
    let (service, _store) = build_service(FailingGateway);
    let id = service.open_session().expect("open session").id;
    service
        .choose_language(&id, Language::En)
        .expect("choose language");

    match service.submit_preferences(&id, preferences(), false).await {
        Err(WizardError::StageMismatch { expected, actual }) => {
            assert_eq!(expected, "preference_profile");
            assert_eq!(actual, "personal_profile");
        }
        other => panic!("expected stage mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn full_walk_lands_on_a_settled_results_stage() {
    let (service, _store) = build_service(ScriptedGateway::new(r#"{"recommended_ids": [7, 3]}"#));

    let (_id, session) = settle_results(&service).await;

    let state = results_state(&session);
    assert_eq!(state.phase, ResultsPhase::Ready);
    assert_eq!(entry_ids(&state.partition.recommended), vec![7, 3]);
}

#[tokio::test]
async fn edit_drops_results_but_keeps_preferences_as_prefill() {
    let (service, _store) = build_service(ScriptedGateway::new(r#"{"recommended_ids": [7]}"#));
    let id = advance_to_preferences(&service);

    let mut custom = preferences();
    custom.education = "ITI Electrician".to_string();
    service
        .submit_preferences(&id, custom, false)
        .await
        .expect("submit preferences");
    service
        .record_feedback(&id, OpportunityId(7), FeedbackSignal::Satisfied)
        .expect("record feedback");
    service
        .set_view_options(&id, None, Some(true))
        .expect("expand other list");

    let session = service.edit_preferences(&id).expect("edit preferences");
    assert!(matches!(session.stage, Stage::PreferenceProfile));
    assert_eq!(session.preferences.education, "ITI Electrician");

    // A fresh submission starts from a clean results screen.
    let session = service
        .submit_preferences(&id, session.preferences.clone(), false)
        .await
        .expect("resubmit preferences");
    let state = results_state(&session);
    assert!(state.feedback.is_empty());
    assert!(!state.options.show_all_others);
}

#[test]
fn unknown_session_is_not_found() {
    let (service, _store) = build_service(FailingGateway);

    match service.session(&SessionId("session-missing".to_string())) {
        Err(WizardError::Store(SessionStoreError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn edit_requires_a_results_stage() {
    let (service, _store) = build_service(FailingGateway);
    let id = advance_to_preferences(&service);

    match service.edit_preferences(&id) {
        Err(WizardError::StageMismatch { expected, actual }) => {
            assert_eq!(expected, "results");
            assert_eq!(actual, "preference_profile");
        }
        other => panic!("expected stage mismatch, got {other:?}"),
    }
}
