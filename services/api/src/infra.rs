use async_trait::async_trait;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use vetan::localization::Language;
use vetan::workflows::matching::{
    GeminiGateway, RankingGateway, RankingGatewayError, SessionId, SessionStore,
    SessionStoreError, WizardSession,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, WizardSession>>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: WizardSession) -> Result<WizardSession, SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        if guard.contains_key(&session.id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: WizardSession) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        if guard.contains_key(&session.id) {
            guard.insert(session.id.clone(), session);
            Ok(())
        } else {
            Err(SessionStoreError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
        let guard = self.sessions.lock().expect("session store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Gateway used when no API key is configured. Every request fails, which the
/// ranking client turns into the degraded full-catalog listing.
#[derive(Default, Clone)]
pub(crate) struct OfflineRankingGateway;

#[async_trait]
impl RankingGateway for OfflineRankingGateway {
    async fn request_ranking(&self, _prompt: &str) -> Result<String, RankingGatewayError> {
        Err(RankingGatewayError::Disabled)
    }
}

/// Gateway that answers every request with a fixed reply. The CLI demo uses
/// it to show the ranked path without network access.
#[derive(Clone)]
pub(crate) struct ScriptedRankingGateway {
    reply: String,
}

impl ScriptedRankingGateway {
    pub(crate) fn new(reply: String) -> Self {
        Self { reply }
    }
}

#[async_trait]
impl RankingGateway for ScriptedRankingGateway {
    async fn request_ranking(&self, _prompt: &str) -> Result<String, RankingGatewayError> {
        Ok(self.reply.clone())
    }
}

/// The ranking transports the binary can be wired with.
pub(crate) enum RankingBackend {
    Gemini(GeminiGateway),
    Offline(OfflineRankingGateway),
    Scripted(ScriptedRankingGateway),
}

#[async_trait]
impl RankingGateway for RankingBackend {
    async fn request_ranking(&self, prompt: &str) -> Result<String, RankingGatewayError> {
        match self {
            RankingBackend::Gemini(gateway) => gateway.request_ranking(prompt).await,
            RankingBackend::Offline(gateway) => gateway.request_ranking(prompt).await,
            RankingBackend::Scripted(gateway) => gateway.request_ranking(prompt).await,
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    Language::parse(raw).ok_or_else(|| {
        let offered: Vec<&str> = Language::ALL.iter().map(|lang| lang.code()).collect();
        format!("'{raw}' is not an offered language (try one of {})", offered.join(", "))
    })
}
