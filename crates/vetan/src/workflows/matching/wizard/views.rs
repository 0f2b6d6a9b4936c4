use chrono::NaiveDate;
use serde::Serialize;

use crate::localization::{translate, Language};

use super::super::catalog::{Opportunity, OpportunityId};
use super::super::results::{FeedbackSignal, ResultsPhase, ResultsViewState};
use super::domain::{PreferenceProfile, Stage, WizardSession};

/// Session snapshot rendered for API clients. Copy is already localized so
/// front ends stay dumb.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub language: &'static str,
    pub stage: &'static str,
    pub preferences: PreferenceProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsView>,
}

impl SessionView {
    pub fn from_session(session: &WizardSession, today: NaiveDate) -> Self {
        let results = match &session.stage {
            Stage::Results(state) => Some(ResultsView::from_state(state, session.language, today)),
            _ => None,
        };

        Self {
            session_id: session.id.0.clone(),
            language: session.language.code(),
            stage: session.stage.label(),
            preferences: session.preferences.clone(),
            results,
        }
    }
}

/// The results screen: headline copy plus the visible slices of both lists.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub phase: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub recommended: Vec<OpportunityCardView>,
    pub other: Vec<OpportunityCardView>,
    pub other_total: usize,
    pub show_all_others: bool,
    pub best_match_only: bool,
}

impl ResultsView {
    pub fn from_state(state: &ResultsViewState, language: Language, today: NaiveDate) -> Self {
        let (title, subtitle, notice) = match state.phase {
            ResultsPhase::Loading => (
                translate(language, "loadingTitle").to_string(),
                Some(translate(language, "loadingSubtitle").to_string()),
                None,
            ),
            ResultsPhase::Ready => (
                translate(language, "internshipMatchesTitle").to_string(),
                None,
                None,
            ),
            ResultsPhase::Degraded => (
                translate(language, "internshipMatchesTitle").to_string(),
                None,
                Some(translate(language, "recommendationError").to_string()),
            ),
        };

        let recommended = state
            .visible_recommended()
            .iter()
            .map(|entry| OpportunityCardView::from_entry(entry, state, language, today, true))
            .collect();
        let other = state
            .visible_other()
            .iter()
            .map(|entry| OpportunityCardView::from_entry(entry, state, language, today, false))
            .collect();

        Self {
            phase: state.phase.label(),
            title,
            subtitle,
            notice,
            recommended,
            other,
            other_total: state.partition.other.len(),
            show_all_others: state.options.show_all_others,
            best_match_only: state.options.best_match_only,
        }
    }
}

/// One opportunity card with its localized deadline counter and any recorded
/// reaction.
#[derive(Debug, Clone, Serialize)]
pub struct OpportunityCardView {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub sector: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub deadline: NaiveDate,
    pub days_left: i64,
    pub deadline_status: String,
    pub recommended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackSignal>,
}

impl OpportunityCardView {
    fn from_entry(
        entry: &Opportunity,
        state: &ResultsViewState,
        language: Language,
        today: NaiveDate,
        recommended: bool,
    ) -> Self {
        let days_left = (entry.deadline - today).num_days();
        let deadline_status = if days_left < 0 {
            translate(language, "deadlinePassed").to_string()
        } else {
            format!("\u{23F3} {} {}", days_left, translate(language, "daysLeft"))
        };

        Self {
            id: entry.id.0,
            title: entry.title.clone(),
            organization: entry.organization.clone(),
            location: entry.location.clone(),
            sector: entry.sector.clone(),
            description: entry.description.clone(),
            required_skills: entry.required_skills.clone(),
            deadline: entry.deadline,
            days_left,
            deadline_status,
            recommended,
            feedback: state.feedback.get(&entry.id).copied(),
        }
    }
}

/// Acknowledgement returned after a feedback submission.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackAck {
    pub opportunity_id: OpportunityId,
    pub signal: FeedbackSignal,
    pub message: String,
}
