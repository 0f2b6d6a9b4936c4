use crate::infra::{
    InMemorySessionStore, OfflineRankingGateway, RankingBackend, ScriptedRankingGateway,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use vetan::error::AppError;
use vetan::localization::Language;
use vetan::workflows::matching::{
    Catalog, FeedbackSignal, Gender, MatchWizardService, OpportunityId, PersonalProfile,
    PreferenceProfile, SessionView, WizardError,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Interface language for the walkthrough (code or name, e.g. hi or Hindi)
    #[arg(long, default_value = "hi", value_parser = crate::infra::parse_language)]
    pub(crate) language: Language,
    /// Applicant date of birth (YYYY-MM-DD). Defaults to an eligible age.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date_of_birth: Option<NaiveDate>,
    /// Override the reference date for the age gate and deadline counters.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional catalog CSV to rank instead of the built-in set.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Skip the scripted oracle and show the degraded full-catalog path.
    #[arg(long)]
    pub(crate) offline: bool,
    /// Ask for only the single best match on the results screen.
    #[arg(long)]
    pub(crate) best_match: bool,
    /// Expand the other-options list past its first page.
    #[arg(long)]
    pub(crate) show_all: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        language,
        date_of_birth,
        today,
        catalog,
        offline,
        best_match,
        show_all,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let date_of_birth = date_of_birth.unwrap_or_else(|| today - chrono::Duration::days(25 * 365));

    let (catalog, source) = match catalog {
        Some(path) => {
            let catalog = Catalog::from_csv_path(&path)?;
            (catalog, format!("{}", path.display()))
        }
        None => (Catalog::builtin(), "built-in scheme catalog".to_string()),
    };

    let gateway = if offline {
        RankingBackend::Offline(OfflineRankingGateway)
    } else {
        RankingBackend::Scripted(ScriptedRankingGateway::new(scripted_reply(&catalog)))
    };

    println!("VETAN match wizard demo");
    println!("- Catalog: {} opportunities ({})", catalog.len(), source);
    println!(
        "- Oracle: {}",
        if offline {
            "offline, expect the degraded listing"
        } else {
            "scripted reply standing in for Gemini"
        }
    );

    let service = MatchWizardService::new(
        Arc::new(InMemorySessionStore::default()),
        Arc::new(gateway),
        Arc::new(catalog),
    );

    let session = service.open_session()?;
    let id = session.id.clone();
    println!("\n- Opened {} at stage {}", id.0, session.stage.label());

    service.choose_language(&id, language)?;
    println!(
        "- Language locked to {} ({})",
        language.display_name(),
        language.code()
    );

    let personal = PersonalProfile {
        full_name: "Asha Verma".to_string(),
        date_of_birth,
        contact_number: "9876501234".to_string(),
        address: "Ward 4, Alwar, Rajasthan".to_string(),
        gender: Gender::Female,
    };
    let session = match service.submit_personal(&id, personal, today) {
        Ok(session) => session,
        Err(WizardError::Ineligible { message }) => {
            println!("- Age gate refused the applicant: {message}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!(
        "- Personal details accepted, stage {}",
        session.stage.label()
    );

    let preferences = PreferenceProfile::default();
    println!("- Submitting preferences:");
    println!("    Education: {}", preferences.education);
    println!("    Location:  {}", preferences.location);
    println!("    Skills:    {}", preferences.skills_line());
    println!("    Interests: {}", preferences.interests);

    let session = service
        .submit_preferences(&id, preferences, best_match)
        .await?;

    let session = if show_all {
        service.set_view_options(&id, None, Some(true))?
    } else {
        session
    };

    let view = SessionView::from_session(&session, today);
    let results = match view.results {
        Some(results) => results,
        None => {
            println!("- No results section rendered");
            return Ok(());
        }
    };

    println!("\n{} [{}]", results.title, results.phase);
    if let Some(notice) = &results.notice {
        println!("  {notice}");
    }
    println!("  Recommended:");
    if results.recommended.is_empty() {
        println!("    (none)");
    }
    for (rank, card) in results.recommended.iter().enumerate() {
        println!(
            "    {}. {} | {} | {} | {}",
            rank + 1,
            card.title,
            card.sector,
            card.location,
            card.deadline_status
        );
    }
    println!(
        "  Other options ({} of {} shown):",
        results.other.len(),
        results.other_total
    );
    for card in &results.other {
        println!(
            "    - {} | {} | {}",
            card.title, card.sector, card.deadline_status
        );
    }

    let target = results
        .recommended
        .first()
        .or_else(|| results.other.first())
        .map(|card| OpportunityId(card.id));
    if let Some(target) = target {
        let ack = service.record_feedback(&id, target, FeedbackSignal::Satisfied)?;
        println!(
            "\n- Feedback {} recorded for opportunity {}: {}",
            FeedbackSignal::Satisfied.emoji(),
            ack.opportunity_id,
            ack.message
        );
    }

    let session = service.edit_preferences(&id)?;
    println!(
        "- Edit returns to stage {}; preferences kept as prefill ({})",
        session.stage.label(),
        session.preferences.education
    );

    let snapshot = SessionView::from_session(&session, today);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("\nSession snapshot payload:\n{json}"),
        Err(err) => println!("\nSession snapshot payload unavailable: {err}"),
    }

    Ok(())
}

/// Canned oracle reply: the last five catalog ids, best first, so the ranked
/// path visibly reorders the listing.
fn scripted_reply(catalog: &Catalog) -> String {
    let ids: Vec<String> = catalog
        .entries()
        .iter()
        .rev()
        .take(5)
        .map(|entry| entry.id.0.to_string())
        .collect();
    format!(r#"{{"recommended_ids": [{}]}}"#, ids.join(", "))
}
