//! Four-step match wizard: language pick, personal details, match
//! preferences, results. The service owns stage transitions and the single
//! ranking round trip; storage and the ranking transport stay behind traits
//! so the flow can be exercised in isolation.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{Gender, PersonalProfile, PreferenceProfile, SessionId, Stage, WizardSession};
pub use router::wizard_router;
pub use service::{MatchWizardService, WizardError};
pub use store::{SessionStore, SessionStoreError};
pub use views::{FeedbackAck, OpportunityCardView, ResultsView, SessionView};
