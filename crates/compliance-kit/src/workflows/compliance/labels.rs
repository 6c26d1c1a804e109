//! Display strings for questionnaire answers, one table per enum.
//!
//! Tables are plain `match` expressions over `'static` strings so lookups never
//! allocate and nothing is written after compilation.

use super::domain::{Answer, Industry, Locale, PersonalDataExposure};

/// Em dash shown in place of empty free-text fields.
pub const EMPTY_PLACEHOLDER: &str = "\u{2014}";

pub trait Localized {
    fn label(&self, locale: Locale) -> &'static str;
}

impl Localized for Industry {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Industry::It, _) => "IT / Software",
            (Industry::Consulting, Locale::De) => "Beratung",
            (Industry::Consulting, Locale::En) => "Consulting",
            (Industry::Marketing, Locale::De) => "Marketing / Agentur",
            (Industry::Marketing, Locale::En) => "Marketing / Agency",
            (Industry::Ecommerce, Locale::De) => "E-Commerce / Handel",
            (Industry::Ecommerce, Locale::En) => "E-commerce / Retail",
            (Industry::Health, Locale::De) => "Gesundheitswesen",
            (Industry::Health, Locale::En) => "Healthcare",
            (Industry::Finance, Locale::De) => "Finanzdienstleistungen",
            (Industry::Finance, Locale::En) => "Financial services",
            (Industry::Education, Locale::De) => "Bildung",
            (Industry::Education, Locale::En) => "Education",
            (Industry::Other, Locale::De) => "Sonstige",
            (Industry::Other, Locale::En) => "Other",
        }
    }
}

impl Localized for PersonalDataExposure {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (PersonalDataExposure::No, Locale::De) => "Nein",
            (PersonalDataExposure::No, Locale::En) => "No",
            (PersonalDataExposure::Limited, Locale::De) => "Ja, begrenzt",
            (PersonalDataExposure::Limited, Locale::En) => "Yes, limited",
            (PersonalDataExposure::Regular, Locale::De) => "Ja, regelmäßig",
            (PersonalDataExposure::Regular, Locale::En) => "Yes, regularly",
        }
    }
}

impl Localized for Answer {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Answer::Yes, Locale::De) => "Ja",
            (Answer::Yes, Locale::En) => "Yes",
            (Answer::No, Locale::De) => "Nein",
            (Answer::No, Locale::En) => "No",
        }
    }
}

/// Joins tool names with `", "`, falling back to the placeholder when empty.
pub fn tool_list(tools: &[String]) -> String {
    if tools.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        tools.join(", ")
    }
}

pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_industry_has_distinct_labels_per_locale() {
        let industries = [
            Industry::It,
            Industry::Consulting,
            Industry::Marketing,
            Industry::Ecommerce,
            Industry::Health,
            Industry::Finance,
            Industry::Education,
            Industry::Other,
        ];
        for locale in Locale::ALL {
            let mut labels: Vec<_> = industries.iter().map(|i| i.label(locale)).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), industries.len());
        }
    }

    #[test]
    fn empty_values_use_em_dash() {
        assert_eq!(tool_list(&[]), "\u{2014}");
        assert_eq!(
            tool_list(&["ChatGPT".to_string(), "DeepL".to_string()]),
            "ChatGPT, DeepL"
        );
        assert_eq!(or_placeholder("  "), "\u{2014}");
        assert_eq!(or_placeholder("drafting"), "drafting");
    }
}
