use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;

use crate::workflows::compliance::domain::{Locale, Questionnaire};
use crate::workflows::compliance::labels::Localized;
use crate::workflows::compliance::layout::RenderError;
use crate::workflows::compliance::risk::RiskAssessment;

pub const SHEET_NAME: &str = "AI Register";

pub const HEADER: [&str; 9] = [
    "Tool",
    "Use case",
    "Industry",
    "Employees",
    "Personal data",
    "External use",
    "Automated decisions",
    "Risk",
    "Last review",
];

/// The register is written once in English and shipped unchanged in both folders.
const LOCALE: Locale = Locale::En;

/// One register entry per AI tool, columns in [`HEADER`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRow {
    pub tool: String,
    pub use_case: String,
    pub industry: &'static str,
    pub employees: &'static str,
    pub personal_data: &'static str,
    pub external_use: &'static str,
    pub automated_decisions: &'static str,
    pub risk: String,
    pub last_review: String,
}

impl RegisterRow {
    pub fn cells(&self) -> [&str; 9] {
        [
            self.tool.as_str(),
            self.use_case.as_str(),
            self.industry,
            self.employees,
            self.personal_data,
            self.external_use,
            self.automated_decisions,
            self.risk.as_str(),
            self.last_review.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Register {
    pub rows: Vec<RegisterRow>,
}

impl Register {
    pub fn build(
        questionnaire: &Questionnaire,
        assessment: &RiskAssessment,
        review_date: NaiveDate,
    ) -> Self {
        let risk = assessment.summary(LOCALE);
        let last_review = review_date.format("%Y-%m-%d").to_string();
        let rows = questionnaire
            .tools
            .iter()
            .map(|tool| RegisterRow {
                tool: tool.clone(),
                use_case: questionnaire.use_case.clone(),
                industry: questionnaire.industry.label(LOCALE),
                employees: questionnaire.employees.label(),
                personal_data: questionnaire.personal_data.label(LOCALE),
                external_use: questionnaire.external_use.label(LOCALE),
                automated_decisions: questionnaire.automated_decisions.label(LOCALE),
                risk: risk.clone(),
                last_review: last_review.clone(),
            })
            .collect();
        Self { rows }
    }

    /// Serialize to an `.xlsx` workbook: bold header row, then one row per tool.
    pub fn to_xlsx(&self) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, title) in HEADER.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            let row_number = index as u32 + 1;
            for (col, value) in row.cells().iter().enumerate() {
                sheet.write_string(row_number, col as u16, *value)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::compliance::domain::{
        Answer, EmployeeBand, Industry, PersonalDataExposure,
    };
    use crate::workflows::compliance::risk;

    fn questionnaire(tools: &[&str]) -> Questionnaire {
        Questionnaire {
            company: "Acme GmbH".to_string(),
            address: "Main St 1".to_string(),
            industry: Industry::Consulting,
            employees: EmployeeBand::UpToFifty,
            tools: tools.iter().map(|tool| tool.to_string()).collect(),
            use_case: "drafting".to_string(),
            personal_data: PersonalDataExposure::Limited,
            external_use: Answer::Yes,
            automated_decisions: Answer::No,
        }
    }

    #[test]
    fn one_row_per_tool_in_input_order() {
        let q = questionnaire(&["ChatGPT", "DeepL", "ChatGPT"]);
        let assessment = risk::score(q.personal_data, q.external_use, q.automated_decisions);
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date");
        let register = Register::build(&q, &assessment, date);

        let tools: Vec<_> = register.rows.iter().map(|row| row.tool.as_str()).collect();
        assert_eq!(tools, vec!["ChatGPT", "DeepL", "ChatGPT"]);
        assert_eq!(
            register.rows[0].cells(),
            [
                "ChatGPT",
                "drafting",
                "Consulting",
                "21-50",
                "Yes, limited",
                "Yes",
                "No",
                "Medium (3/6)",
                "2026-10-14",
            ]
        );
    }

    #[test]
    fn workbook_is_a_zip_container() {
        let q = questionnaire(&["Copilot"]);
        let assessment = risk::score(q.personal_data, q.external_use, q.automated_decisions);
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");
        let bytes = Register::build(&q, &assessment, date)
            .to_xlsx()
            .expect("workbook renders");
        assert!(bytes.starts_with(b"PK"));
    }
}
