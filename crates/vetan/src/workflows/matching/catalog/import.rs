use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Catalog, Opportunity, OpportunityId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: {reason}")]
    Row { row: usize, reason: String },
}

pub(super) fn read_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        // Row numbers are 1-based and the header occupies the first line.
        let row_number = index + 2;
        let row = record?;
        let entry = row.into_opportunity(row_number)?;

        if !seen.insert(entry.id) {
            return Err(CatalogImportError::Row {
                row: row_number,
                reason: format!("opportunity id {} appears more than once", entry.id),
            });
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(CatalogImportError::Row {
            row: 1,
            reason: "catalog must contain at least one opportunity".to_string(),
        });
    }

    Ok(Catalog::new(entries))
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Organization")]
    organization: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Sector")]
    sector: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Required Skills")]
    required_skills: String,
    #[serde(rename = "Deadline")]
    deadline: String,
}

impl CatalogRow {
    fn into_opportunity(self, row: usize) -> Result<Opportunity, CatalogImportError> {
        if self.title.is_empty() {
            return Err(CatalogImportError::Row {
                row,
                reason: "title must not be empty".to_string(),
            });
        }

        let deadline =
            NaiveDate::parse_from_str(&self.deadline, "%Y-%m-%d").map_err(|_| {
                CatalogImportError::Row {
                    row,
                    reason: format!("deadline '{}' must be formatted YYYY-MM-DD", self.deadline),
                }
            })?;

        Ok(Opportunity {
            id: OpportunityId(self.id),
            title: self.title,
            organization: self.organization,
            location: self.location,
            description: self.description,
            required_skills: split_skills(&self.required_skills),
            sector: self.sector,
            deadline,
        })
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
