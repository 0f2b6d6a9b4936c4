use serde::Serialize;

use super::super::catalog::{Catalog, Opportunity};
use super::super::wizard::domain::PreferenceProfile;
use super::MAX_RECOMMENDATIONS;

/// Catalog subset the oracle is shown. Organization and deadline stay out of
/// the prompt; they only matter for display.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OpportunityDigest<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    required_skills: &'a [String],
    sector: &'a str,
    location: &'a str,
}

impl<'a> From<&'a Opportunity> for OpportunityDigest<'a> {
    fn from(opportunity: &'a Opportunity) -> Self {
        Self {
            id: opportunity.id.0,
            title: &opportunity.title,
            description: &opportunity.description,
            required_skills: &opportunity.required_skills,
            sector: &opportunity.sector,
            location: &opportunity.location,
        }
    }
}

/// Render the ranking prompt: the applicant profile, the catalog digest as
/// pretty JSON, and instructions pinning the reply to `recommended_ids`.
pub(crate) fn build_ranking_prompt(
    profile: &PreferenceProfile,
    catalog: &Catalog,
) -> Result<String, serde_json::Error> {
    let digest: Vec<OpportunityDigest<'_>> =
        catalog.entries().iter().map(OpportunityDigest::from).collect();
    let listing = serde_json::to_string_pretty(&digest)?;

    Ok(format!(
        "Based on the following user profile, please recommend the top {max} most suitable internships from the provided list.\n\
         User Profile:\n\
         - Education: {education}\n\
         - Location: {location}\n\
         - Skills: {skills}\n\
         - Interests: {interests}\n\
         \n\
         Internship List (JSON format):\n\
         {listing}\n\
         \n\
         Your task is to return a JSON object containing a single key \"recommended_ids\", which is an array of the top {max} recommended internship IDs.\n\
         The order of the IDs in the array should be from most to least recommended.\n\
         Consider the user's skills, interests, and location when making recommendations. Match required skills with user skills, and user interests with internship sector and description. Give some preference to internships in or near the user's location.\n\
         Do not add any explanation, just return the JSON object.",
        max = MAX_RECOMMENDATIONS,
        education = profile.education,
        location = profile.location,
        skills = profile.skills_line(),
        interests = profile.interests,
    ))
}
