use super::common::*;
use crate::workflows::compliance::{
    DocumentKind, Locale, PackageError, RecommendedAction, RiskLevel, ValidationError,
};
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use serde_json::json;

#[tokio::test]
async fn paid_session_produces_low_risk_package() {
    let (service, gateway) = build_service(GatewayBehavior::Paid);
    let package = service
        .generate(&as_map(scenario_payload()))
        .await
        .expect("package generated");

    assert_eq!(package.assessment.score, 0);
    assert_eq!(package.assessment.level, RiskLevel::Low);
    assert_eq!(package.composed.documents.len(), 8);
    assert_eq!(package.composed.register.rows.len(), 1);
    assert_eq!(gateway.lookups(), vec!["cs_test_1".to_string()]);
    assert!(package.archive.file_name.starts_with("AI-Compliance-DE-EN-"));
    assert!(package.archive.file_name.ends_with(".zip"));
}

#[tokio::test]
async fn high_risk_actions_appear_in_both_policies() {
    let (service, _) = build_service(GatewayBehavior::Paid);
    let package = service
        .generate(&as_map(high_risk_payload()))
        .await
        .expect("package generated");

    assert_eq!(package.assessment.score, 6);
    assert_eq!(package.assessment.level, RiskLevel::High);
    for locale in Locale::ALL {
        let policy = package
            .composed
            .document(DocumentKind::UsePolicy, locale)
            .expect("policy present");
        for action in RiskLevel::High.recommended_actions() {
            assert!(
                policy.contains_line(action.text(locale)),
                "{locale:?} policy is missing {action:?}"
            );
        }
    }
}

#[tokio::test]
async fn unpaid_session_is_rejected_without_rendering() {
    let (service, gateway) = build_service(GatewayBehavior::Unpaid);
    let err = service
        .generate(&as_map(scenario_payload()))
        .await
        .expect_err("unpaid sessions fail");

    assert!(matches!(err, PackageError::PaymentNotConfirmed));
    assert_eq!(err.code(), "not_paid");
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(gateway.lookups().len(), 1);
}

#[tokio::test]
async fn lookup_failures_surface_once_as_server_errors() {
    let (service, gateway) = build_service(GatewayBehavior::Unreachable);
    let err = service
        .generate(&as_map(scenario_payload()))
        .await
        .expect_err("lookup fails");

    assert_eq!(err.code(), "payment_lookup_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(gateway.lookups().len(), 1);
}

#[tokio::test]
async fn validation_runs_before_payment_lookup() {
    let (service, gateway) = build_service(GatewayBehavior::Paid);
    let mut payload = scenario_payload();
    payload["tools"] = json!("");

    let err = service
        .generate(&as_map(payload))
        .await
        .expect_err("missing tools");
    assert!(matches!(
        err,
        PackageError::Validation(ValidationError::MissingTools)
    ));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(gateway.lookups().is_empty());
}

#[tokio::test]
async fn identical_inputs_compose_identical_text() {
    let (service, _) = build_service(GatewayBehavior::Paid);
    let at = Utc
        .with_ymd_and_hms(2026, 10, 14, 8, 30, 0)
        .single()
        .expect("valid timestamp");
    let payload = as_map(high_risk_payload());

    let first = service.generate_at(&payload, at).await.expect("first run");
    let second = service.generate_at(&payload, at).await.expect("second run");

    assert_eq!(first.composed, second.composed);
    assert_eq!(first.assessment, second.assessment);
    assert_eq!(first.archive.file_name, second.archive.file_name);
    assert_eq!(
        first.composed.register.rows[0].last_review,
        "2026-10-14".to_string()
    );
    assert_eq!(
        first.assessment.recommended_actions[0],
        RecommendedAction::FourEyesReview
    );
}
