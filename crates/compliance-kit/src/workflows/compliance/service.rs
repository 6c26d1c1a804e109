use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use tracing::{error, info, warn};

use super::archive::{assemble, Archive, ArchiveError};
use super::documents::{compose, render, ComposedPackage};
use super::domain::Questionnaire;
use super::intake::{questionnaire_from, session_id_from, ValidationError};
use super::layout::RenderError;
use super::risk::{score, RiskAssessment};
use crate::workflows::payments::{PaymentGateway, PaymentLookupError};

/// Failures of a single generate request. Nothing is retried and no partial
/// archive is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("payment lookup failed: {0}")]
    PaymentLookup(#[from] PaymentLookupError),
    #[error("checkout session has not been paid")]
    PaymentNotConfirmed,
    #[error("document rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("archive assembly failed: {0}")]
    Archive(#[from] ArchiveError),
    #[error("document generation was interrupted: {0}")]
    Interrupted(String),
}

impl PackageError {
    pub fn code(&self) -> &'static str {
        match self {
            PackageError::Validation(err) => err.code(),
            PackageError::PaymentLookup(_) => "payment_lookup_error",
            PackageError::PaymentNotConfirmed => "not_paid",
            PackageError::Render(_) | PackageError::Archive(_) | PackageError::Interrupted(_) => {
                "generation_failed"
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PackageError::Validation(_) => StatusCode::BAD_REQUEST,
            PackageError::PaymentNotConfirmed => StatusCode::FORBIDDEN,
            PackageError::PaymentLookup(_)
            | PackageError::Render(_)
            | PackageError::Archive(_)
            | PackageError::Interrupted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PackageError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

/// Result of a successful run: the archive plus the data it was built from.
#[derive(Debug, Clone)]
pub struct GeneratedPackage {
    pub archive: Archive,
    pub assessment: RiskAssessment,
    pub composed: ComposedPackage,
}

/// Score, compose, render and zip a validated questionnaire.
///
/// Payment is not checked here; callers that sell the package go through
/// [`CompliancePackageService`].
pub fn build_package(
    questionnaire: &Questionnaire,
    generated_at: DateTime<Utc>,
) -> Result<GeneratedPackage, PackageError> {
    let assessment = score(
        questionnaire.personal_data,
        questionnaire.external_use,
        questionnaire.automated_decisions,
    );
    let composed = compose(questionnaire, &assessment, generated_at.date_naive());
    let rendered = render(&composed)?;
    let archive = assemble(&rendered, generated_at)?;

    info!(
        documents = rendered.len(),
        bytes = archive.bytes.len(),
        score = assessment.score,
        level = ?assessment.level,
        "compliance package assembled"
    );

    Ok(GeneratedPackage {
        archive,
        assessment,
        composed,
    })
}

/// Request pipeline: normalize, verify payment once, then build the package.
pub struct CompliancePackageService<G> {
    gateway: Arc<G>,
}

impl<G> CompliancePackageService<G>
where
    G: PaymentGateway + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn generate(
        &self,
        raw: &Map<String, Value>,
    ) -> Result<GeneratedPackage, PackageError> {
        self.generate_at(raw, Utc::now()).await
    }

    pub async fn generate_at(
        &self,
        raw: &Map<String, Value>,
        generated_at: DateTime<Utc>,
    ) -> Result<GeneratedPackage, PackageError> {
        let session_id = session_id_from(raw)?;
        let questionnaire = questionnaire_from(raw)?;

        let status = self
            .gateway
            .verify_payment(session_id.as_str())
            .await
            .map_err(|err| {
                error!(session = session_id.redacted(), error = %err, "payment lookup failed");
                PackageError::PaymentLookup(err)
            })?;
        if !status.paid {
            warn!(session = session_id.redacted(), "checkout session not paid");
            return Err(PackageError::PaymentNotConfirmed);
        }

        info!(
            session = session_id.redacted(),
            tools = questionnaire.tools.len(),
            "payment confirmed, generating package"
        );

        tokio::task::spawn_blocking(move || build_package(&questionnaire, generated_at))
            .await
            .map_err(|err| PackageError::Interrupted(err.to_string()))?
    }
}
