use super::domain::{SessionId, WizardSession};

/// Storage abstraction so the wizard service can be exercised in isolation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: WizardSession) -> Result<WizardSession, SessionStoreError>;
    fn update(&self, session: WizardSession) -> Result<(), SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<WizardSession>, SessionStoreError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
