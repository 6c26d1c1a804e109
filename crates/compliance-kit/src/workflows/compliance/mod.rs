//! AI compliance package: questionnaire intake, risk scoring, bilingual document
//! composition, PDF/XLSX rendering and archive assembly.

pub mod archive;
pub mod documents;
pub mod domain;
pub mod intake;
pub mod labels;
pub mod layout;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use archive::{archive_file_name, assemble, Archive, ArchiveError};
pub use documents::{
    compose, render, ComposedPackage, DocumentKind, Register, RegisterRow, RenderedDocument,
    TextDocument,
};
pub use domain::{
    Answer, EmployeeBand, Industry, Locale, PersonalDataExposure, Questionnaire, SessionId,
};
pub use intake::{questionnaire_from, session_id_from, ValidationError};
pub use layout::{paginate, render_pdf, PagePlan, RenderError};
pub use risk::{score, RecommendedAction, RiskAssessment, RiskLevel, MAX_RISK_SCORE};
pub use router::compliance_router;
pub use service::{build_package, CompliancePackageService, GeneratedPackage, PackageError};
