use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::localization::Language;

use super::super::results::ResultsViewState;

/// Identifier wrapper for wizard sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Identity details collected on the personal step. Only the date of birth
/// feeds a rule (the age gate); the rest is carried for the application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub address: String,
    pub gender: Gender,
}

/// Match preferences the ranking prompt is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub education: String,
    pub location: String,
    pub skills: Vec<String>,
    pub interests: String,
}

impl PreferenceProfile {
    /// Skills joined for prompt and form display.
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }
}

impl Default for PreferenceProfile {
    /// Prefill shown to first-time applicants so the form never opens blank.
    fn default() -> Self {
        Self {
            education: "12th Pass".to_string(),
            location: "Rural Rajasthan".to_string(),
            skills: vec![
                "Basic computer skills".to_string(),
                "good communication".to_string(),
            ],
            interests: "Working with communities, teaching".to_string(),
        }
    }
}

/// Wizard step the session currently sits on. Results carries the full view
/// state so a session snapshot is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    LanguageSelect,
    PersonalProfile,
    PreferenceProfile,
    Results(ResultsViewState),
}

impl Stage {
    pub const fn label(&self) -> &'static str {
        match self {
            Stage::LanguageSelect => "language_select",
            Stage::PersonalProfile => "personal_profile",
            Stage::PreferenceProfile => "preference_profile",
            Stage::Results(_) => "results",
        }
    }
}

/// One applicant's walk through the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    pub id: SessionId,
    pub language: Language,
    pub personal: Option<PersonalProfile>,
    pub preferences: PreferenceProfile,
    pub stage: Stage,
}
