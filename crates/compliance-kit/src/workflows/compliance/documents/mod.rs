mod english;
mod german;
pub mod register;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Locale, Questionnaire};
use super::layout::{render_pdf, RenderError};
use super::risk::RiskAssessment;
pub use register::{Register, RegisterRow};

/// The four text documents shipped in each language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    UsePolicy,
    TransparencyNotice,
    RiskAssessment,
    ComplianceSummary,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        Self::UsePolicy,
        Self::TransparencyNotice,
        Self::RiskAssessment,
        Self::ComplianceSummary,
    ];

    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::UsePolicy, Locale::De) => "KI-Nutzungsrichtlinie",
            (Self::UsePolicy, Locale::En) => "AI Use Policy",
            (Self::TransparencyNotice, Locale::De) => "KI-Transparenzhinweis",
            (Self::TransparencyNotice, Locale::En) => "AI Transparency Notice",
            (Self::RiskAssessment, Locale::De) => "KI-Risikoselbsteinschätzung",
            (Self::RiskAssessment, Locale::En) => "AI Risk Self-Assessment",
            (Self::ComplianceSummary, Locale::De) => "Compliance-Zusammenfassung",
            (Self::ComplianceSummary, Locale::En) => "Compliance Summary",
        }
    }

    pub fn file_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::UsePolicy, Locale::De) => "KI-Nutzungsrichtlinie.pdf",
            (Self::UsePolicy, Locale::En) => "AI-Use-Policy.pdf",
            (Self::TransparencyNotice, Locale::De) => "KI-Transparenzhinweis.pdf",
            (Self::TransparencyNotice, Locale::En) => "AI-Transparency-Notice.pdf",
            (Self::RiskAssessment, Locale::De) => "KI-Risikoselbsteinschaetzung.pdf",
            (Self::RiskAssessment, Locale::En) => "AI-Risk-Self-Assessment.pdf",
            (Self::ComplianceSummary, Locale::De) => "Compliance-Zusammenfassung.pdf",
            (Self::ComplianceSummary, Locale::En) => "Compliance-Summary.pdf",
        }
    }
}

pub fn register_file_name(locale: Locale) -> &'static str {
    match locale {
        Locale::De => "Internes-KI-Verzeichnis.xlsx",
        Locale::En => "Internal-AI-Register.xlsx",
    }
}

/// Inputs shared by every document builder.
pub(crate) struct DocumentContext<'a> {
    pub questionnaire: &'a Questionnaire,
    pub assessment: &'a RiskAssessment,
    pub review_date: NaiveDate,
}

/// A text document before page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextDocument {
    pub kind: DocumentKind,
    pub locale: Locale,
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl TextDocument {
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name(self.locale)
    }

    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Everything the archive needs, still as text and table rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedPackage {
    pub documents: Vec<TextDocument>,
    pub register: Register,
}

impl ComposedPackage {
    pub fn document(&self, kind: DocumentKind, locale: Locale) -> Option<&TextDocument> {
        self.documents
            .iter()
            .find(|doc| doc.kind == kind && doc.locale == locale)
    }
}

/// A finished file destined for one archive folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub title: String,
    pub locale: Locale,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn folder(&self) -> &'static str {
        self.locale.folder()
    }

    pub fn archive_path(&self) -> String {
        format!("{}/{}", self.folder(), self.file_name)
    }
}

/// Build the German set, the English set, and the register.
///
/// Pure apart from `review_date`: the same inputs always yield the same lines.
pub fn compose(
    questionnaire: &Questionnaire,
    assessment: &RiskAssessment,
    review_date: NaiveDate,
) -> ComposedPackage {
    let ctx = DocumentContext {
        questionnaire,
        assessment,
        review_date,
    };

    let documents = Locale::ALL
        .into_iter()
        .flat_map(|locale| DocumentKind::ALL.map(|kind| (locale, kind)))
        .map(|(locale, kind)| TextDocument {
            kind,
            locale,
            title: kind.title(locale),
            lines: lines_for(&ctx, kind, locale),
        })
        .collect();

    ComposedPackage {
        documents,
        register: Register::build(questionnaire, assessment, review_date),
    }
}

fn lines_for(ctx: &DocumentContext<'_>, kind: DocumentKind, locale: Locale) -> Vec<String> {
    match (kind, locale) {
        (DocumentKind::UsePolicy, Locale::De) => german::use_policy(ctx),
        (DocumentKind::TransparencyNotice, Locale::De) => german::transparency_notice(ctx),
        (DocumentKind::RiskAssessment, Locale::De) => german::risk_assessment(ctx),
        (DocumentKind::ComplianceSummary, Locale::De) => german::compliance_summary(ctx),
        (DocumentKind::UsePolicy, Locale::En) => english::use_policy(ctx),
        (DocumentKind::TransparencyNotice, Locale::En) => english::transparency_notice(ctx),
        (DocumentKind::RiskAssessment, Locale::En) => english::risk_assessment(ctx),
        (DocumentKind::ComplianceSummary, Locale::En) => english::compliance_summary(ctx),
    }
}

/// Lay out every text document as PDF and serialize the register once, placing a
/// copy of the workbook in each locale folder. Fails on the first document that
/// cannot be rendered.
pub fn render(package: &ComposedPackage) -> Result<Vec<RenderedDocument>, RenderError> {
    let mut rendered = Vec::with_capacity(package.documents.len() + Locale::ALL.len());

    for document in &package.documents {
        rendered.push(RenderedDocument {
            title: document.title.to_string(),
            locale: document.locale,
            file_name: document.file_name().to_string(),
            bytes: render_pdf(document.title, &document.lines)?,
        });
    }

    let workbook = package.register.to_xlsx()?;
    for locale in Locale::ALL {
        rendered.push(RenderedDocument {
            title: register::SHEET_NAME.to_string(),
            locale,
            file_name: register_file_name(locale).to_string(),
            bytes: workbook.clone(),
        });
    }

    Ok(rendered)
}
