use std::fmt;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod import;

pub use import::CatalogImportError;

/// Identifier wrapper for catalog opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OpportunityId(pub u32);

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One internship opening as advertised in the scheme catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub sector: String,
    pub deadline: NaiveDate,
}

/// Ordered, immutable set of opportunities loaded once at startup.
///
/// The stored order is the presentation order for unranked listings; the
/// ranking oracle only ever reorders a subset of it.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Opportunity>,
}

impl Catalog {
    pub fn new(entries: Vec<Opportunity>) -> Self {
        Self { entries }
    }

    /// The compiled-in PM Internship Scheme catalog.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_opportunities(),
        }
    }

    /// Load a catalog from CSV, replacing the built-in set.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        import::read_catalog(reader)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        import::read_catalog(file)
    }

    pub fn entries(&self) -> &[Opportunity] {
        &self.entries
    }

    pub fn get(&self, id: OpportunityId) -> Option<&Opportunity> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: OpportunityId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn seed(
    id: u32,
    title: &str,
    organization: &str,
    location: &str,
    sector: &str,
    description: &str,
    required_skills: &[&str],
    deadline: NaiveDate,
) -> Opportunity {
    Opportunity {
        id: OpportunityId(id),
        title: title.to_string(),
        organization: organization.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        sector: sector.to_string(),
        deadline,
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn builtin_opportunities() -> Vec<Opportunity> {
    vec![
        seed(
            1,
            "Digital Literacy Trainer Intern",
            "National Digital Saksharta Mission",
            "Jaipur, Rajasthan",
            "Education",
            "Run computer basics classes in village common service centres and help residents register for government portals.",
            &["Basic computer", "Teaching", "Hindi"],
            ymd(2026, 10, 15),
        ),
        seed(
            2,
            "Community Health Outreach Intern",
            "Gramin Swasthya Mission",
            "Bhopal, Madhya Pradesh",
            "Healthcare",
            "Support ASHA workers with vaccination drives, health surveys, and awareness sessions in rural blocks.",
            &["Communication", "Record keeping", "Local language"],
            ymd(2026, 9, 30),
        ),
        seed(
            3,
            "Agri-Tech Field Assistant",
            "Kisan Unnati Collective",
            "Nagpur, Maharashtra",
            "Agriculture",
            "Demonstrate soil testing kits and mobile advisory apps to smallholder farmers and collect crop data.",
            &["Smartphone apps", "Farming knowledge", "Data entry"],
            ymd(2026, 11, 20),
        ),
        seed(
            4,
            "Rural Banking Correspondent Intern",
            "Grameen Seva Bank",
            "Patna, Bihar",
            "Finance",
            "Assist banking correspondents with account opening camps and teach customers to use UPI safely.",
            &["Numeracy", "Basic computer", "Customer service"],
            ymd(2026, 10, 5),
        ),
        seed(
            5,
            "Handloom Marketing Intern",
            "Bunkar Haat Federation",
            "Varanasi, Uttar Pradesh",
            "Handicrafts",
            "Photograph weaver products, write listings for online marketplaces, and coordinate dispatches.",
            &["Photography", "Written English", "Social media"],
            ymd(2026, 12, 1),
        ),
        seed(
            6,
            "Solar Maintenance Trainee",
            "Surya Shakti Energy",
            "Jodhpur, Rajasthan",
            "Renewable Energy",
            "Inspect and clean village solar microgrid installations and log panel output readings.",
            &["Electrical basics", "Safety awareness", "Two-wheeler driving"],
            ymd(2026, 9, 25),
        ),
        seed(
            7,
            "Panchayat Digital Records Intern",
            "e-Gram Seva",
            "Coimbatore, Tamil Nadu",
            "Governance",
            "Digitize panchayat land and welfare records and train clerks on the new filing system.",
            &["Typing", "Attention to detail", "Tamil"],
            ymd(2026, 11, 10),
        ),
        seed(
            8,
            "Water Conservation Survey Intern",
            "Jal Dhara Foundation",
            "Aurangabad, Maharashtra",
            "Environment",
            "Map village water sources, measure well levels, and help plan rainwater harvesting structures.",
            &["Surveying", "Walking fieldwork", "Marathi"],
            ymd(2027, 1, 15),
        ),
        seed(
            9,
            "Primary School Teaching Assistant",
            "Shiksha Jyoti Trust",
            "Ranchi, Jharkhand",
            "Education",
            "Lead remedial reading groups for classes 3 to 5 and prepare low-cost teaching aids.",
            &["Teaching children", "Patience", "Hindi"],
            ymd(2026, 10, 30),
        ),
        seed(
            10,
            "Dairy Cooperative Operations Intern",
            "Amrit Dugdh Sangh",
            "Anand, Gujarat",
            "Agriculture",
            "Record milk collection data, assist with quality testing, and reconcile member payments.",
            &["Numeracy", "Record keeping", "Gujarati"],
            ymd(2026, 12, 20),
        ),
    ]
}
