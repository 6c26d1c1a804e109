use serde_json::{Map, Value};
use tracing::debug;

use super::domain::{
    Answer, EmployeeBand, Industry, PersonalDataExposure, Questionnaire, SessionId,
};

pub const MAX_COMPANY_CHARS: usize = 200;
pub const MAX_ADDRESS_CHARS: usize = 200;
pub const MAX_USE_CASE_CHARS: usize = 300;
pub const MAX_TOOLS_CHARS: usize = 500;

const SESSION_PREFIXES: [&str; 2] = ["cs_test_", "cs_live_"];

/// Rejections raised while normalizing an inbound questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("checkout session id is missing")]
    MissingSessionId,
    #[error("checkout session id does not look like a hosted checkout session")]
    InvalidSessionId,
    #[error("company name is required")]
    MissingCompany,
    #[error("company address is required")]
    MissingAddress,
    #[error("at least one AI tool is required")]
    MissingTools,
    #[error("use case description is required")]
    MissingUseCase,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingSessionId => "missing_session_id",
            ValidationError::InvalidSessionId => "invalid_session_id",
            ValidationError::MissingCompany => "missing_company",
            ValidationError::MissingAddress => "missing_address",
            ValidationError::MissingTools => "missing_tools",
            ValidationError::MissingUseCase => "missing_useCase",
        }
    }
}

/// Read the checkout session reference from a raw payload.
pub fn session_id_from(raw: &Map<String, Value>) -> Result<SessionId, ValidationError> {
    let value = text_field(raw, &["sessionId", "session_id"]);
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingSessionId);
    }
    if !is_checkout_session_id(value) {
        return Err(ValidationError::InvalidSessionId);
    }
    Ok(SessionId(value.to_string()))
}

pub fn is_checkout_session_id(value: &str) -> bool {
    SESSION_PREFIXES.iter().any(|prefix| {
        value
            .strip_prefix(prefix)
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()))
    })
}

/// Coerce an untyped payload into a [`Questionnaire`].
///
/// Text is trimmed and cut to its field limit; unknown enum values fall back to
/// their defaults. Only the required free-text fields and the tool list can fail.
pub fn questionnaire_from(raw: &Map<String, Value>) -> Result<Questionnaire, ValidationError> {
    let company = bounded(&text_field(raw, &["company"]), MAX_COMPANY_CHARS);
    if company.is_empty() {
        return Err(ValidationError::MissingCompany);
    }

    let address = bounded(&text_field(raw, &["address"]), MAX_ADDRESS_CHARS);
    if address.is_empty() {
        return Err(ValidationError::MissingAddress);
    }

    let tools = split_tools(&bounded(&text_field(raw, &["tools"]), MAX_TOOLS_CHARS));
    if tools.is_empty() {
        return Err(ValidationError::MissingTools);
    }

    let use_case = bounded(&text_field(raw, &["useCase", "use_case"]), MAX_USE_CASE_CHARS);
    if use_case.is_empty() {
        return Err(ValidationError::MissingUseCase);
    }

    Ok(Questionnaire {
        company,
        address,
        industry: lenient(raw, &["industry"], Industry::parse),
        employees: lenient(raw, &["employees"], EmployeeBand::parse),
        tools,
        use_case,
        personal_data: lenient(
            raw,
            &["personalData", "personal_data", "uses_personal_data"],
            PersonalDataExposure::parse,
        ),
        external_use: lenient(raw, &["externalUse", "external_use"], Answer::parse),
        automated_decisions: lenient(
            raw,
            &["automatedDecisions", "automated_decisions"],
            Answer::parse,
        ),
    })
}

/// First string value found under any of `keys`; anything else reads as empty.
fn text_field(raw: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn lenient<T: Default + std::fmt::Debug>(
    raw: &Map<String, Value>,
    keys: &[&str],
    parse: fn(&str) -> Option<T>,
) -> T {
    let value = text_field(raw, keys);
    match parse(&value) {
        Some(parsed) => parsed,
        None => {
            let fallback = T::default();
            if !value.is_empty() {
                debug!(field = keys[0], ?fallback, "unrecognized answer, using default");
            }
            fallback
        }
    }
}

/// Replace control characters with spaces, trim, and keep at most `max` chars.
fn bounded(value: &str, max: usize) -> String {
    let flattened: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    flattened.trim().chars().take(max).collect::<String>().trim_end().to_string()
}

fn split_tools(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tool| !tool.is_empty())
        .map(str::to_string)
        .collect()
}
