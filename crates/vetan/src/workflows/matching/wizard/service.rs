use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::localization::{translate, Language};

use super::super::catalog::{Catalog, OpportunityId};
use super::super::eligibility::is_eligible;
use super::super::ranking::{RankingClient, RankingGateway};
use super::super::results::{FeedbackSignal, ResultsPhase, ResultsViewState};
use super::domain::{PersonalProfile, PreferenceProfile, SessionId, Stage, WizardSession};
use super::store::{SessionStore, SessionStoreError};
use super::views::FeedbackAck;

/// Service composing the session store, the ranking client, and the catalog.
pub struct MatchWizardService<S, G> {
    store: Arc<S>,
    client: RankingClient<G>,
    catalog: Arc<Catalog>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<S, G> MatchWizardService<S, G>
where
    S: SessionStore + 'static,
    G: RankingGateway + 'static,
{
    pub fn new(store: Arc<S>, gateway: Arc<G>, catalog: Arc<Catalog>) -> Self {
        Self {
            store,
            client: RankingClient::new(gateway),
            catalog,
        }
    }

    /// Open a fresh session at the language step with the standard prefill.
    pub fn open_session(&self) -> Result<WizardSession, WizardError> {
        let session = WizardSession {
            id: next_session_id(),
            language: Language::default(),
            personal: None,
            preferences: PreferenceProfile::default(),
            stage: Stage::LanguageSelect,
        };
        let stored = self.store.insert(session)?;
        info!(session_id = %stored.id.0, "wizard session opened");
        Ok(stored)
    }

    /// Fetch a session snapshot.
    pub fn session(&self, id: &SessionId) -> Result<WizardSession, WizardError> {
        let session = self.store.fetch(id)?.ok_or(SessionStoreError::NotFound)?;
        Ok(session)
    }

    /// Pick the interface language and advance to the personal step. The
    /// language stays fixed for the rest of the session.
    pub fn choose_language(
        &self,
        id: &SessionId,
        language: Language,
    ) -> Result<WizardSession, WizardError> {
        let mut session = self.session(id)?;
        if !matches!(session.stage, Stage::LanguageSelect) {
            return Err(WizardError::StageMismatch {
                expected: "language_select",
                actual: session.stage.label(),
            });
        }

        session.language = language;
        session.stage = Stage::PersonalProfile;
        self.store.update(session.clone())?;
        Ok(session)
    }

    /// Record personal details and advance. The age gate runs against
    /// `as_of`; under-age applicants stay on the personal step and get the
    /// refusal in their session language.
    pub fn submit_personal(
        &self,
        id: &SessionId,
        profile: PersonalProfile,
        as_of: NaiveDate,
    ) -> Result<WizardSession, WizardError> {
        let mut session = self.session(id)?;
        if !matches!(session.stage, Stage::PersonalProfile) {
            return Err(WizardError::StageMismatch {
                expected: "personal_profile",
                actual: session.stage.label(),
            });
        }
        if !is_eligible(profile.date_of_birth, as_of) {
            return Err(WizardError::Ineligible {
                message: translate(session.language, "ageValidationError").to_string(),
            });
        }

        session.personal = Some(profile);
        session.stage = Stage::PreferenceProfile;
        self.store.update(session.clone())?;
        Ok(session)
    }

    /// Store the match preferences and run one ranking round trip.
    ///
    /// The session is parked on a loading results stage before the oracle is
    /// consulted, so a concurrent submission for the same session sees
    /// [`WizardError::RankingInFlight`] instead of racing. The outcome is
    /// applied only if the session is still loading when the oracle answers.
    pub async fn submit_preferences(
        &self,
        id: &SessionId,
        preferences: PreferenceProfile,
        best_match_only: bool,
    ) -> Result<WizardSession, WizardError> {
        let mut session = self.session(id)?;
        match &session.stage {
            Stage::PreferenceProfile => {}
            Stage::Results(state) if state.phase == ResultsPhase::Loading => {
                return Err(WizardError::RankingInFlight);
            }
            other => {
                return Err(WizardError::StageMismatch {
                    expected: "preference_profile",
                    actual: other.label(),
                });
            }
        }

        session.preferences = preferences.clone();
        session.stage = Stage::Results(ResultsViewState::loading(best_match_only));
        self.store.update(session.clone())?;

        let outcome = self.client.rank(&preferences, &self.catalog).await;
        info!(
            session_id = %id.0,
            outcome = outcome.label(),
            "ranking round trip settled"
        );

        let mut session = self.session(id)?;
        if let Stage::Results(state) = &mut session.stage {
            if state.phase == ResultsPhase::Loading {
                *state = ResultsViewState::from_outcome(&outcome, &self.catalog, state.options);
                self.store.update(session.clone())?;
            }
        }
        Ok(session)
    }

    /// Record a reaction to one opportunity and hand back a localized
    /// acknowledgement. Ids outside the catalog are accepted; the ledger is
    /// advisory, not a foreign key.
    pub fn record_feedback(
        &self,
        id: &SessionId,
        opportunity_id: OpportunityId,
        signal: FeedbackSignal,
    ) -> Result<FeedbackAck, WizardError> {
        let mut session = self.session(id)?;
        let language = session.language;
        match &mut session.stage {
            Stage::Results(state) if state.phase == ResultsPhase::Loading => {
                return Err(WizardError::RankingInFlight);
            }
            Stage::Results(state) => state.record_feedback(opportunity_id, signal),
            other => {
                return Err(WizardError::StageMismatch {
                    expected: "results",
                    actual: other.label(),
                });
            }
        }
        self.store.update(session)?;

        Ok(FeedbackAck {
            opportunity_id,
            signal,
            message: translate(language, "feedbackThanks").to_string(),
        })
    }

    /// Flip the display toggles on a settled results screen. `None` leaves a
    /// toggle as it was.
    pub fn set_view_options(
        &self,
        id: &SessionId,
        best_match_only: Option<bool>,
        show_all_others: Option<bool>,
    ) -> Result<WizardSession, WizardError> {
        let mut session = self.session(id)?;
        match &mut session.stage {
            Stage::Results(state) if state.phase == ResultsPhase::Loading => {
                return Err(WizardError::RankingInFlight);
            }
            Stage::Results(state) => {
                if let Some(best) = best_match_only {
                    state.options.best_match_only = best;
                }
                if let Some(all) = show_all_others {
                    state.options.show_all_others = all;
                }
            }
            other => {
                return Err(WizardError::StageMismatch {
                    expected: "results",
                    actual: other.label(),
                });
            }
        }
        self.store.update(session.clone())?;
        Ok(session)
    }

    /// Drop the results screen and return to the preference step. The stored
    /// preferences survive as the next prefill; the ranking, the feedback
    /// ledger, and the view toggles do not.
    pub fn edit_preferences(&self, id: &SessionId) -> Result<WizardSession, WizardError> {
        let mut session = self.session(id)?;
        match &session.stage {
            Stage::Results(state) if state.phase == ResultsPhase::Loading => {
                return Err(WizardError::RankingInFlight);
            }
            Stage::Results(_) => {}
            other => {
                return Err(WizardError::StageMismatch {
                    expected: "results",
                    actual: other.label(),
                });
            }
        }

        session.stage = Stage::PreferenceProfile;
        self.store.update(session.clone())?;
        Ok(session)
    }
}

/// Error raised by the wizard service.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("operation requires the {expected} stage but the session is at {actual}")]
    StageMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("a ranking request is already in flight for this session")]
    RankingInFlight,
    #[error("{message}")]
    Ineligible { message: String },
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
