//! Partitioning of the catalog around a ranking outcome, and the view state
//! the results screen renders from.
//!
//! Everything here is pure data manipulation: no clocks, no I/O, no oracle.
//! The partition invariants hold for every outcome: recommended and other are
//! disjoint, together they cover exactly the catalog ids that appear at all,
//! recommended follows oracle order, other follows catalog order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Opportunity, OpportunityId};
use super::ranking::RankingOutcome;

/// Page size for the collapsed "other options" list.
pub const OTHER_PAGE_SIZE: usize = 3;

/// Catalog split into the oracle's picks and everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionedResult {
    pub recommended: Vec<Opportunity>,
    pub other: Vec<Opportunity>,
}

/// Split the catalog around a ranking outcome.
///
/// Ranked ids that do not exist in the catalog are dropped silently; the
/// oracle is allowed to hallucinate without taking the screen down. An
/// unavailable ranking puts the entire catalog in `other`.
pub fn partition(outcome: &RankingOutcome, catalog: &Catalog) -> PartitionedResult {
    let ranked_ids: &[OpportunityId] = match outcome {
        RankingOutcome::Ranked(ids) => ids,
        RankingOutcome::Unavailable => &[],
    };

    let recommended: Vec<Opportunity> = ranked_ids
        .iter()
        .filter_map(|id| catalog.get(*id).cloned())
        .collect();
    let other: Vec<Opportunity> = catalog
        .entries()
        .iter()
        .filter(|entry| !ranked_ids.contains(&entry.id))
        .cloned()
        .collect();

    PartitionedResult { recommended, other }
}

/// Display toggles chosen by the applicant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Show only the single best match in the recommended section.
    pub best_match_only: bool,
    /// Expand the other list past [`OTHER_PAGE_SIZE`].
    pub show_all_others: bool,
}

/// Per-opportunity reaction recorded from the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSignal {
    Satisfied,
    Neutral,
    Dissatisfied,
}

impl FeedbackSignal {
    pub const fn label(&self) -> &'static str {
        match self {
            FeedbackSignal::Satisfied => "satisfied",
            FeedbackSignal::Neutral => "neutral",
            FeedbackSignal::Dissatisfied => "dissatisfied",
        }
    }

    pub const fn emoji(&self) -> &'static str {
        match self {
            FeedbackSignal::Satisfied => "\u{1F60A}",
            FeedbackSignal::Neutral => "\u{1F610}",
            FeedbackSignal::Dissatisfied => "\u{1F61F}",
        }
    }
}

/// Where the results screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsPhase {
    /// Ranking request in flight; nothing to show yet.
    Loading,
    /// Ranking applied. Holds even when every ranked id was unknown.
    Ready,
    /// Ranking unavailable; the full catalog renders unranked.
    Degraded,
}

impl ResultsPhase {
    pub const fn label(&self) -> &'static str {
        match self {
            ResultsPhase::Loading => "loading",
            ResultsPhase::Ready => "ready",
            ResultsPhase::Degraded => "degraded",
        }
    }
}

/// Everything the results screen needs, derived once per ranking and then
/// mutated only by feedback and view toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsViewState {
    pub phase: ResultsPhase,
    pub partition: PartitionedResult,
    pub options: ViewOptions,
    pub feedback: BTreeMap<OpportunityId, FeedbackSignal>,
}

impl ResultsViewState {
    /// State shown while the ranking request is still in flight.
    pub fn loading(best_match_only: bool) -> Self {
        Self {
            phase: ResultsPhase::Loading,
            partition: PartitionedResult::default(),
            options: ViewOptions {
                best_match_only,
                show_all_others: false,
            },
            feedback: BTreeMap::new(),
        }
    }

    /// Settle a loading state with the oracle's outcome. The feedback ledger
    /// starts empty; reactions never outlive the ranking they were given for.
    pub fn from_outcome(
        outcome: &RankingOutcome,
        catalog: &Catalog,
        options: ViewOptions,
    ) -> Self {
        let phase = match outcome {
            RankingOutcome::Ranked(_) => ResultsPhase::Ready,
            RankingOutcome::Unavailable => ResultsPhase::Degraded,
        };
        Self {
            phase,
            partition: partition(outcome, catalog),
            options,
            feedback: BTreeMap::new(),
        }
    }

    /// Recommended entries after the best-match toggle.
    pub fn visible_recommended(&self) -> &[Opportunity] {
        let all = self.partition.recommended.as_slice();
        if self.options.best_match_only {
            &all[..all.len().min(1)]
        } else {
            all
        }
    }

    /// Other entries after pagination: the first page until the applicant
    /// asks for the rest.
    pub fn visible_other(&self) -> &[Opportunity] {
        let all = self.partition.other.as_slice();
        if self.options.show_all_others {
            all
        } else {
            &all[..all.len().min(OTHER_PAGE_SIZE)]
        }
    }

    /// Record a reaction, overwriting any earlier one for the same id.
    pub fn record_feedback(&mut self, id: OpportunityId, signal: FeedbackSignal) {
        self.feedback.insert(id, signal);
    }
}
