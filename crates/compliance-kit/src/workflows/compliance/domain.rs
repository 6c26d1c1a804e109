use serde::{Deserialize, Serialize};

/// Output language of a rendered document. Each locale maps to one archive folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    De,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    pub fn folder(self) -> &'static str {
        match self {
            Locale::De => "DE",
            Locale::En => "EN",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    It,
    Consulting,
    Marketing,
    Ecommerce,
    Health,
    Finance,
    Education,
    #[default]
    Other,
}

impl Industry {
    pub fn parse(raw: &str) -> Option<Self> {
        let industry = match raw.trim().to_ascii_lowercase().as_str() {
            "it" => Self::It,
            "consulting" => Self::Consulting,
            "marketing" => Self::Marketing,
            "ecommerce" => Self::Ecommerce,
            "health" => Self::Health,
            "finance" => Self::Finance,
            "education" => Self::Education,
            "other" => Self::Other,
            _ => return None,
        };
        Some(industry)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeBand {
    #[default]
    #[serde(rename = "1-5")]
    UpToFive,
    #[serde(rename = "6-20")]
    UpToTwenty,
    #[serde(rename = "21-50")]
    UpToFifty,
    #[serde(rename = "51-200")]
    UpToTwoHundred,
    #[serde(rename = "200+")]
    OverTwoHundred,
}

impl EmployeeBand {
    pub fn parse(raw: &str) -> Option<Self> {
        let band = match raw.trim() {
            "1-5" => Self::UpToFive,
            "6-20" => Self::UpToTwenty,
            "21-50" => Self::UpToFifty,
            "51-200" => Self::UpToTwoHundred,
            "200+" => Self::OverTwoHundred,
            _ => return None,
        };
        Some(band)
    }

    /// Band as entered on the form; identical in both locales.
    pub fn label(self) -> &'static str {
        match self {
            Self::UpToFive => "1-5",
            Self::UpToTwenty => "6-20",
            Self::UpToFifty => "21-50",
            Self::UpToTwoHundred => "51-200",
            Self::OverTwoHundred => "200+",
        }
    }
}

/// How often personal data is entered into AI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalDataExposure {
    #[default]
    No,
    Limited,
    Regular,
}

impl PersonalDataExposure {
    pub const ALL: [PersonalDataExposure; 3] = [Self::No, Self::Limited, Self::Regular];

    pub fn parse(raw: &str) -> Option<Self> {
        let exposure = match raw.trim().to_ascii_lowercase().as_str() {
            "no" => Self::No,
            "limited" => Self::Limited,
            "regular" => Self::Regular,
            _ => return None,
        };
        Some(exposure)
    }
}

/// Bool-like questionnaire answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    #[default]
    No,
}

impl Answer {
    pub const ALL: [Answer; 2] = [Self::Yes, Self::No];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Normalized company and AI-usage profile. Built once per request by the
/// normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    pub company: String,
    pub address: String,
    pub industry: Industry,
    pub employees: EmployeeBand,
    pub tools: Vec<String>,
    pub use_case: String,
    pub personal_data: PersonalDataExposure,
    pub external_use: Answer,
    pub automated_decisions: Answer,
}

/// Checkout session reference accepted alongside a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mode prefix (`cs_test` / `cs_live`) safe to log without the full id.
    pub fn redacted(&self) -> &str {
        self.0
            .match_indices('_')
            .nth(1)
            .map(|(index, _)| &self.0[..index])
            .unwrap_or("cs")
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
