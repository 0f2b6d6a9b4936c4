use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::localization::Language;
use crate::workflows::matching::catalog::{Catalog, Opportunity, OpportunityId};
use crate::workflows::matching::ranking::{RankingGateway, RankingGatewayError};
use crate::workflows::matching::results::ResultsViewState;
use crate::workflows::matching::wizard::domain::{
    Gender, PersonalProfile, PreferenceProfile, SessionId, Stage, WizardSession,
};
use crate::workflows::matching::wizard::service::MatchWizardService;
use crate::workflows::matching::wizard::store::{SessionStore, SessionStoreError};

pub(super) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Reference day used by every dated assertion.
pub(super) fn as_of() -> NaiveDate {
    ymd(2026, 8, 1)
}

fn entry(
    id: u32,
    title: &str,
    organization: &str,
    location: &str,
    sector: &str,
    skills: &[&str],
    deadline: NaiveDate,
) -> Opportunity {
    Opportunity {
        id: OpportunityId(id),
        title: title.to_string(),
        organization: organization.to_string(),
        location: location.to_string(),
        description: format!("{title} placement under the scheme."),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        sector: sector.to_string(),
        deadline,
    }
}

/// Five-entry catalog with deliberately gappy ids so oracle hallucinations
/// have room to miss.
pub(super) fn catalog() -> Catalog {
    Catalog::new(vec![
        entry(
            1,
            "Village Library Digitization Intern",
            "Rajasthan Gram Seva Trust",
            "Alwar",
            "Education",
            &["Data entry", "Hindi typing"],
            ymd(2026, 9, 30),
        ),
        entry(
            3,
            "Kisan Helpline Assistant",
            "Krishi Vikas Kendra",
            "Jaipur",
            "Agriculture",
            &["Phone etiquette", "Record keeping"],
            ymd(2026, 10, 15),
        ),
        entry(
            7,
            "Ward Sanitation Survey Intern",
            "Swachh Bharat Cell",
            "Udaipur",
            "Governance",
            &["Survey collection", "Local language fluency"],
            ymd(2026, 11, 5),
        ),
        entry(
            9,
            "Anganwadi Support Intern",
            "Women and Child Welfare Society",
            "Kota",
            "Healthcare",
            &["Patience", "Record keeping"],
            ymd(2026, 12, 1),
        ),
        entry(
            12,
            "Solar Pump Maintenance Trainee",
            "Surya Urja Cooperative",
            "Barmer",
            "Renewable Energy",
            &["Basic electrical work"],
            ymd(2027, 1, 10),
        ),
    ])
}

pub(super) fn personal() -> PersonalProfile {
    PersonalProfile {
        full_name: "Asha Verma".to_string(),
        date_of_birth: ymd(1999, 3, 12),
        contact_number: "9876501234".to_string(),
        address: "Ward 4, Alwar, Rajasthan".to_string(),
        gender: Gender::Female,
    }
}

pub(super) fn preferences() -> PreferenceProfile {
    PreferenceProfile::default()
}

pub(super) fn build_service<G>(
    gateway: G,
) -> (MatchWizardService<MemoryStore, G>, Arc<MemoryStore>)
where
    G: RankingGateway + 'static,
{
    let store = Arc::new(MemoryStore::default());
    let service = MatchWizardService::new(
        store.clone(),
        Arc::new(gateway),
        Arc::new(catalog()),
    );
    (service, store)
}

/// Open a session and walk it to the preference step in Hindi.
pub(super) fn advance_to_preferences<G>(service: &MatchWizardService<MemoryStore, G>) -> SessionId
where
    G: RankingGateway + 'static,
{
    let session = service.open_session().expect("open session");
    let id = session.id.clone();
    service
        .choose_language(&id, Language::Hi)
        .expect("choose language");
    service
        .submit_personal(&id, personal(), as_of())
        .expect("submit personal");
    id
}

/// Walk a fresh session all the way to a settled results stage.
pub(super) async fn settle_results<G>(
    service: &MatchWizardService<MemoryStore, G>,
) -> (SessionId, WizardSession)
where
    G: RankingGateway + 'static,
{
    let id = advance_to_preferences(service);
    let session = service
        .submit_preferences(&id, preferences(), false)
        .await
        .expect("submit preferences");
    (id, session)
}

/// Insert a session already parked on a loading results stage, as if a
/// ranking round trip were still out.
pub(super) fn park_loading_session(store: &MemoryStore) -> SessionId {
    let id = SessionId("session-parked".to_string());
    let session = WizardSession {
        id: id.clone(),
        language: Language::En,
        personal: Some(personal()),
        preferences: preferences(),
        stage: Stage::Results(ResultsViewState::loading(false)),
    };
    store.insert(session).expect("park loading session");
    id
}

pub(super) fn results_state(session: &WizardSession) -> &ResultsViewState {
    match &session.stage {
        Stage::Results(state) => state,
        other => panic!("expected results stage, got {}", other.label()),
    }
}

pub(super) fn entry_ids(entries: &[Opportunity]) -> Vec<u32> {
    entries.iter().map(|entry| entry.id.0).collect()
}

#[derive(Default)]
pub(super) struct MemoryStore {
    sessions: Arc<Mutex<HashMap<SessionId, WizardSession>>>,
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: WizardSession) -> Result<WizardSession, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(&session.id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: WizardSession) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Gateway that always answers with the scripted reply text.
pub(super) struct ScriptedGateway {
    reply: String,
}

impl ScriptedGateway {
    pub(super) fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl RankingGateway for ScriptedGateway {
    async fn request_ranking(&self, _prompt: &str) -> Result<String, RankingGatewayError> {
        Ok(self.reply.clone())
    }
}

/// Gateway that fails every request at the transport layer.
pub(super) struct FailingGateway;

#[async_trait]
impl RankingGateway for FailingGateway {
    async fn request_ranking(&self, _prompt: &str) -> Result<String, RankingGatewayError> {
        Err(RankingGatewayError::Transport(
            "connection reset".to_string(),
        ))
    }
}

/// Gateway that records every prompt it is handed before answering.
pub(super) struct PromptCapturingGateway {
    reply: String,
    pub(super) prompts: Arc<Mutex<Vec<String>>>,
}

impl PromptCapturingGateway {
    pub(super) fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl RankingGateway for PromptCapturingGateway {
    async fn request_ranking(&self, prompt: &str) -> Result<String, RankingGatewayError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        Ok(self.reply.clone())
    }
}
