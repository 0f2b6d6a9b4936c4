//! Client for the external ranking oracle.
//!
//! The oracle is consulted exactly once per submission. Whatever it returns
//! is validated and clamped here; anything that fails validation, and any
//! transport problem, collapses to [`RankingOutcome::Unavailable`] so the
//! wizard can always render a degraded listing. Errors never escape `rank`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::catalog::{Catalog, OpportunityId};
use super::wizard::domain::PreferenceProfile;

mod gateway;
mod prompt;

pub use gateway::{GeminiGateway, RankingGateway, RankingGatewayError};
pub(crate) use prompt::build_ranking_prompt;

/// Upper bound on how many ids a ranking may carry. Replies longer than this
/// are clamped, never rejected.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Result of one ranking attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingOutcome {
    /// Oracle-ordered opportunity ids: at most [`MAX_RECOMMENDATIONS`],
    /// distinct, non-empty. Ids are not guaranteed to exist in the catalog.
    Ranked(Vec<OpportunityId>),
    /// The oracle failed, answered garbage, or had nothing to say.
    Unavailable,
}

impl RankingOutcome {
    pub const fn label(&self) -> &'static str {
        match self {
            RankingOutcome::Ranked(_) => "ranked",
            RankingOutcome::Unavailable => "unavailable",
        }
    }
}

/// Formats the ranking request, runs it through the gateway, and normalizes
/// the reply.
pub struct RankingClient<G> {
    gateway: Arc<G>,
}

impl<G> RankingClient<G>
where
    G: RankingGateway + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Single round trip to the oracle. No retries; every failure mode lands
    /// on [`RankingOutcome::Unavailable`].
    pub async fn rank(&self, profile: &PreferenceProfile, catalog: &Catalog) -> RankingOutcome {
        let prompt = match build_ranking_prompt(profile, catalog) {
            Ok(prompt) => prompt,
            Err(err) => {
                warn!(error = %err, "could not serialize the catalog digest for ranking");
                return RankingOutcome::Unavailable;
            }
        };

        let raw = match self.gateway.request_ranking(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "ranking gateway unavailable, degrading to full catalog");
                return RankingOutcome::Unavailable;
            }
        };

        match decode_recommended_ids(&raw) {
            Some(ids) if !ids.is_empty() => RankingOutcome::Ranked(ids),
            Some(_) => {
                warn!("oracle returned an empty ranking, degrading to full catalog");
                RankingOutcome::Unavailable
            }
            None => {
                warn!("oracle reply did not match the expected shape");
                RankingOutcome::Unavailable
            }
        }
    }
}

/// Decode `{"recommended_ids": [...]}` from the oracle's reply text.
///
/// The list is clamped to [`MAX_RECOMMENDATIONS`] before anything else, then
/// duplicate ids collapse onto their first (best-ranked) position. A single
/// non-numeric entry inside the clamped window invalidates the whole reply;
/// `None` here means shape mismatch, while `Some(vec![])` is a well-formed
/// empty ranking.
pub(crate) fn decode_recommended_ids(raw: &str) -> Option<Vec<OpportunityId>> {
    let value: Value = serde_json::from_str(raw.trim()).ok()?;
    let ids = value.get("recommended_ids")?.as_array()?;

    let mut decoded: Vec<OpportunityId> = Vec::new();
    for entry in ids.iter().take(MAX_RECOMMENDATIONS) {
        let id = OpportunityId(coerce_id(entry)?);
        if !decoded.contains(&id) {
            decoded.push(id);
        }
    }
    Some(decoded)
}

/// Models frequently answer `3.0` where the schema asked for an integer.
fn coerce_id(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) {
        return Some(f as u32);
    }
    None
}
