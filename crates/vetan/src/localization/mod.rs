//! Interface strings for every language the scheme portal offers.
//!
//! Lookups never fail: a key with no entry for the active language is echoed
//! back verbatim, so a missing translation degrades to a readable key instead
//! of an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Languages offered on the opening screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Ta,
    Te,
    Mr,
}

impl Language {
    /// Selector order on the language screen.
    pub const ALL: [Language; 5] = [
        Language::Hi,
        Language::En,
        Language::Ta,
        Language::Te,
        Language::Mr,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Mr => "mr",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ta => "Tamil",
            Language::Te => "Telugu",
            Language::Mr => "Marathi",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "hi" | "hindi" => Some(Language::Hi),
            "ta" | "tamil" => Some(Language::Ta),
            "te" | "telugu" => Some(Language::Te),
            "mr" | "marathi" => Some(Language::Mr),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Look up `key` for `language`, echoing the key back when no entry exists.
pub fn translate(language: Language, key: &str) -> &str {
    tables()
        .get(&language)
        .and_then(|table| table.get(key))
        .copied()
        .unwrap_or(key)
}

type Table = HashMap<&'static str, &'static str>;

static TABLES: OnceLock<HashMap<Language, Table>> = OnceLock::new();

fn tables() -> &'static HashMap<Language, Table> {
    TABLES.get_or_init(|| {
        let english: Table = ENGLISH.iter().copied().collect();
        let hindi: Table = HINDI.iter().copied().collect();

        let mut map = HashMap::with_capacity(Language::ALL.len());
        // Tamil, Telugu, and Marathi are not yet fully translated; they reuse
        // the English table with their own scheme banner.
        for (language, banner) in PARTIAL_BANNERS {
            let mut table = english.clone();
            table.insert("pmInternshipScheme", banner);
            map.insert(*language, table);
        }
        map.insert(Language::En, english);
        map.insert(Language::Hi, hindi);
        map
    })
}

const PARTIAL_BANNERS: &[(Language, &str)] = &[
    (Language::Ta, "Grand Youth PM Internship Program (Tamil)"),
    (Language::Te, "Grand Youth PM Internship Program (Telugu)"),
    (Language::Mr, "Grand Youth PM Internship Program (Marathi)"),
];

const ENGLISH: &[(&str, &str)] = &[
    (
        "vetanFullName",
        "Vocational Education and Training Assistance Network",
    ),
    ("pmInternshipScheme", "PM Internship Scheme for Rural Youth"),
    // Personal profile form
    ("fullNameLabel", "Full Name"),
    ("fullNamePlaceholder", "e.g., Ramesh Kumar"),
    ("dobLabel", "Date of Birth"),
    ("contactNumberLabel", "Contact Number"),
    ("contactNumberPlaceholder", "e.g., 9876543210"),
    ("addressLabel", "Full Address"),
    ("addressPlaceholder", "Village, Post, District, State"),
    ("genderLabel", "Gender"),
    ("genderSelectPlaceholder", "Select your gender"),
    ("genderMale", "Male"),
    ("genderFemale", "Female"),
    ("genderOther", "Other"),
    (
        "ageValidationError",
        "You must be at least 21 years old to apply.",
    ),
    ("nextButton", "Next"),
    // Internship preference form
    ("educationLabel", "Highest Education"),
    ("educationPlaceholder", "e.g., 12th Pass, ITI, Diploma"),
    ("locationLabel", "Current Location"),
    ("locationPlaceholder", "e.g., Jaipur, Rajasthan"),
    ("skillsLabel", "Your Skills"),
    (
        "skillsPlaceholder",
        "e.g., Basic computer, Spoken English, Driving",
    ),
    ("interestsLabel", "Your Interests"),
    (
        "interestsPlaceholder",
        "e.g., Farming, teaching children, healthcare",
    ),
    ("submitButton", "Find Internships"),
    ("submitButtonLoading", "Finding..."),
    ("bestMatchButton", "\u{1F3AF} Show Best Match Internship"),
    // Results page
    ("personalProfileTitle", "Tell Us About Yourself"),
    (
        "personalProfileSubtitle",
        "This information helps us verify your eligibility.",
    ),
    ("internshipProfileTitle", "What are you looking for?"),
    (
        "internshipProfileSubtitle",
        "This helps us find the best internship matches for you.",
    ),
    ("internshipMatchesTitle", "Your Internship Matches"),
    ("editProfileButton", "Edit Profile"),
    ("recommendedSectionTitle", "Top Recommendations For You"),
    ("otherSectionTitle", "Other Internship Options"),
    (
        "recommendationError",
        "Could not fetch recommendations at this time. Showing all available internships.",
    ),
    ("seeMore", "See More"),
    ("seeLess", "See Less"),
    // Loading screen
    ("loadingTitle", "Finding the best matches..."),
    (
        "loadingSubtitle",
        "Our AI is analyzing your profile to find internships just for you. Please wait a moment.",
    ),
    // Opportunity card
    ("recommendedTag", "Recommended"),
    ("skillsRequiredLabel", "Skills Required"),
    ("deadlineLabel", "Deadline"),
    ("daysLeft", "days left to apply"),
    ("deadlinePassed", "Deadline Passed"),
    ("applyNow", "Apply Now"),
    ("preview", "Preview"),
    ("feedbackPrompt", "Did you like this suggestion?"),
    ("feedbackThanks", "Thank you for your feedback!"),
    // Modal
    ("closeButton", "Close"),
];

const HINDI: &[(&str, &str)] = &[
    (
        "vetanFullName",
        "व्यावसायिक शिक्षा और प्रशिक्षण सहायता नेटवर्क",
    ),
    (
        "pmInternshipScheme",
        "ग्रामीण युवाओं के लिए पीएम इंटर्नशिप योजना",
    ),
    ("fullNameLabel", "पूरा नाम"),
    ("fullNamePlaceholder", "उदा., रमेश कुमार"),
    ("dobLabel", "जन्म तिथि"),
    ("contactNumberLabel", "संपर्क नंबर"),
    ("contactNumberPlaceholder", "उदा., 9876543210"),
    ("addressLabel", "पूरा पता"),
    ("addressPlaceholder", "गाँव, पोस्ट, जिला, राज्य"),
    ("genderLabel", "लिंग"),
    ("genderSelectPlaceholder", "अपना लिंग चुनें"),
    ("genderMale", "पुरुष"),
    ("genderFemale", "महिला"),
    ("genderOther", "अन्य"),
    (
        "ageValidationError",
        "आवेदन करने के लिए आपकी आयु कम से कम 21 वर्ष होनी चाहिए।",
    ),
    ("nextButton", "अगला"),
    ("educationLabel", "उच्चतम शिक्षा"),
    ("educationPlaceholder", "उदा., 12वीं पास, आईटीआई, डिप्लोमा"),
    ("locationLabel", "वर्तमान स्थान"),
    ("locationPlaceholder", "उदा., जयपुर, राजस्थान"),
    ("skillsLabel", "आपके कौशल"),
    (
        "skillsPlaceholder",
        "उदा., बेसिक कंप्यूटर, स्पोकन इंग्लिश, ड्राइविंग",
    ),
    ("interestsLabel", "आपकी रुचियां"),
    (
        "interestsPlaceholder",
        "उदा., खेती, बच्चों को पढ़ाना, स्वास्थ्य सेवा",
    ),
    ("submitButton", "इंटर्नशिप खोजें"),
    ("submitButtonLoading", "खोज रहे हैं..."),
    ("bestMatchButton", "\u{1F3AF} सर्वश्रेष्ठ मैच इंटर्नशिप दिखाएं"),
    ("personalProfileTitle", "हमें अपने बारे में बताएं"),
    (
        "personalProfileSubtitle",
        "यह जानकारी हमें आपकी पात्रता सत्यापित करने में मदद करती है।",
    ),
    ("internshipProfileTitle", "आप क्या ढूंढ रहे हैं?"),
    (
        "internshipProfileSubtitle",
        "यह हमें आपके लिए सर्वश्रेष्ठ इंटर्नशिप मैच खोजने में मदद करता है।",
    ),
    ("internshipMatchesTitle", "आपके इंटर्नशिप मैच"),
    ("editProfileButton", "प्रोफ़ाइल संपादित करें"),
    ("recommendedSectionTitle", "आपके लिए शीर्ष सिफारिशें"),
    ("otherSectionTitle", "अन्य इंटर्नशिप विकल्प"),
    (
        "recommendationError",
        "इस समय सिफारिशें प्राप्त नहीं हो सकीं। सभी उपलब्ध इंटर्नशिप दिखा रहे हैं।",
    ),
    ("seeMore", "और देखें"),
    ("seeLess", "कम देखें"),
    ("loadingTitle", "सर्वश्रेष्ठ मैच खोज रहे हैं..."),
    (
        "loadingSubtitle",
        "हमारा AI सिर्फ आपके लिए इंटर्नशिप खोजने के लिए आपकी प्रोफ़ाइल का विश्लेषण कर रहा है। कृपया प्रतीक्षा करें।",
    ),
    ("recommendedTag", "अनुशंसित"),
    ("skillsRequiredLabel", "आवश्यक कौशल"),
    ("deadlineLabel", "आवेदन की अंतिम तिथि"),
    ("daysLeft", "दिन बचे हैं"),
    ("deadlinePassed", "समय सीमा समाप्त"),
    ("applyNow", "अभी आवेदन करें"),
    ("preview", "विवरण देखें"),
    ("feedbackPrompt", "क्या आपको यह सुझाव पसंद आया?"),
    ("feedbackThanks", "आपकी प्रतिक्रिया के लिए धन्यवाद!"),
    ("closeButton", "बंद करें"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_echoed_back() {
        assert_eq!(translate(Language::En, "noSuchKey"), "noSuchKey");
        assert_eq!(translate(Language::Hi, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn hindi_table_is_fully_translated() {
        assert_eq!(
            translate(Language::Hi, "feedbackThanks"),
            "आपकी प्रतिक्रिया के लिए धन्यवाद!"
        );
        for (key, _) in ENGLISH {
            assert_ne!(
                translate(Language::Hi, key),
                *key,
                "hindi entry missing for {key}"
            );
        }
    }

    #[test]
    fn partial_languages_brand_the_banner_and_fall_back_to_english() {
        assert_eq!(
            translate(Language::Ta, "pmInternshipScheme"),
            "Grand Youth PM Internship Program (Tamil)"
        );
        assert_eq!(
            translate(Language::Mr, "feedbackThanks"),
            "Thank you for your feedback!"
        );
    }

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!(Language::parse("hi"), Some(Language::Hi));
        assert_eq!(Language::parse(" Telugu "), Some(Language::Te));
        assert_eq!(Language::parse("fr"), None);
    }

    #[test]
    fn selector_covers_every_language_once() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.code()), Some(language));
        }
    }
}
