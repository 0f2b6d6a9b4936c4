use super::common::*;
use crate::localization::{translate, Language};
use crate::workflows::matching::catalog::OpportunityId;
use crate::workflows::matching::results::FeedbackSignal;
use crate::workflows::matching::wizard::views::SessionView;

#[test]
fn snapshot_before_results_has_no_results_section() {
    let (service, _store) = build_service(FailingGateway);
    let session = service.open_session().expect("open session");

    let view = SessionView::from_session(&session, as_of());

    assert_eq!(view.stage, "language_select");
    assert_eq!(view.language, "en");
    assert!(view.results.is_none());
    assert_eq!(view.preferences.location, "Rural Rajasthan");
}

#[tokio::test]
async fn degraded_results_view_carries_the_unranked_notice() {
    let (service, _store) = build_service(FailingGateway);
    let (_id, session) = settle_results(&service).await;

    let view = SessionView::from_session(&session, as_of());
    let results = view.results.expect("results section");

    assert_eq!(results.phase, "degraded");
    assert_eq!(
        results.notice.as_deref(),
        Some(translate(Language::Hi, "recommendationError"))
    );
    assert!(results.subtitle.is_none());
    assert!(results.recommended.is_empty());
}

#[tokio::test]
async fn ready_results_view_has_plain_headline_copy() {
    let (service, _store) = build_service(ScriptedGateway::new(r#"{"recommended_ids": [7]}"#));
    let (_id, session) = settle_results(&service).await;

    let view = SessionView::from_session(&session, as_of());
    let results = view.results.expect("results section");

    assert_eq!(results.phase, "ready");
    assert_eq!(
        results.title,
        translate(Language::Hi, "internshipMatchesTitle")
    );
    assert!(results.notice.is_none());
    assert!(results.subtitle.is_none());
}

#[test]
fn loading_results_view_shows_the_waiting_copy() {
    let (service, store) = build_service(FailingGateway);
    let id = park_loading_session(&store);
    let session = service.session(&id).expect("fetch session");

    let view = SessionView::from_session(&session, as_of());
    let results = view.results.expect("results section");

    assert_eq!(results.phase, "loading");
    assert_eq!(results.title, translate(Language::En, "loadingTitle"));
    assert_eq!(
        results.subtitle.as_deref(),
        Some(translate(Language::En, "loadingSubtitle"))
    );
    assert!(results.recommended.is_empty());
    assert!(results.other.is_empty());
}

#[tokio::test]
async fn other_list_pages_at_three_until_expanded() {
    let (service, _store) = build_service(FailingGateway);
    let (id, session) = settle_results(&service).await;

    let view = SessionView::from_session(&session, as_of());
    let results = view.results.expect("results section");
    assert_eq!(results.other.len(), 3);
    assert_eq!(results.other_total, 5);
    assert!(!results.show_all_others);
    assert_eq!(
        results.other.iter().map(|card| card.id).collect::<Vec<_>>(),
        vec![1, 3, 7]
    );

    let expanded = service
        .set_view_options(&id, None, Some(true))
        .expect("expand other list");
    let view = SessionView::from_session(&expanded, as_of());
    let results = view.results.expect("results section");
    assert_eq!(results.other.len(), 5);
    assert!(results.show_all_others);
}

#[tokio::test]
async fn best_match_only_limits_recommended_cards_to_one() {
    let (service, _store) =
        build_service(ScriptedGateway::new(r#"{"recommended_ids": [7, 3, 9]}"#));
    let id = advance_to_preferences(&service);
    let session = service
        .submit_preferences(&id, preferences(), true)
        .await
        .expect("submit preferences");

    let view = SessionView::from_session(&session, as_of());
    let results = view.results.expect("results section");

    assert!(results.best_match_only);
    assert_eq!(results.recommended.len(), 1);
    assert_eq!(results.recommended[0].id, 7);
}

#[tokio::test]
async fn deadline_counter_formats_days_left_and_passed() {
    let (service, _store) = build_service(ScriptedGateway::new(r#"{"recommended_ids": [1]}"#));
    let (_id, session) = settle_results(&service).await;

    // Entry 1 closes on 2026-09-30.
    let view = SessionView::from_session(&session, ymd(2026, 9, 25));
    let card = &view.results.expect("results section").recommended[0];
    assert_eq!(card.days_left, 5);
    assert_eq!(
        card.deadline_status,
        format!("\u{23F3} 5 {}", translate(Language::Hi, "daysLeft"))
    );

    let view = SessionView::from_session(&session, ymd(2026, 10, 1));
    let card = &view.results.expect("results section").recommended[0];
    assert_eq!(card.days_left, -1);
    assert_eq!(
        card.deadline_status,
        translate(Language::Hi, "deadlinePassed")
    );
}

#[tokio::test]
async fn recorded_feedback_shows_on_the_card() {
    let (service, _store) = build_service(ScriptedGateway::new(r#"{"recommended_ids": [7, 3]}"#));
    let (id, _session) = settle_results(&service).await;
    service
        .record_feedback(&id, OpportunityId(7), FeedbackSignal::Satisfied)
        .expect("record feedback");

    let session = service.session(&id).expect("fetch session");
    let view = SessionView::from_session(&session, as_of());
    let results = view.results.expect("results section");

    let card = results
        .recommended
        .iter()
        .find(|card| card.id == 7)
        .expect("card for id 7");
    assert_eq!(card.feedback, Some(FeedbackSignal::Satisfied));
    assert!(card.recommended);

    let other = results.other.first().expect("other card");
    assert!(other.feedback.is_none());
    assert!(!other.recommended);
}
