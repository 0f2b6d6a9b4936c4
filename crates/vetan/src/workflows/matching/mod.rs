//! The internship match pipeline: catalog, eligibility gate, ranking oracle
//! client, result partitioning, and the session wizard that drives them.

pub mod catalog;
pub mod eligibility;
pub mod ranking;
pub mod results;
pub mod wizard;

pub use catalog::{Catalog, CatalogImportError, Opportunity, OpportunityId};
pub use ranking::{
    GeminiGateway, RankingClient, RankingGateway, RankingGatewayError, RankingOutcome,
    MAX_RECOMMENDATIONS,
};
pub use results::{
    partition, FeedbackSignal, PartitionedResult, ResultsPhase, ResultsViewState, ViewOptions,
    OTHER_PAGE_SIZE,
};
pub use wizard::{
    wizard_router, FeedbackAck, Gender, MatchWizardService, PersonalProfile, PreferenceProfile,
    SessionId, SessionStore, SessionStoreError, SessionView, Stage, WizardError, WizardSession,
};
