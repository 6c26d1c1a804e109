use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::workflows::compliance::{compliance_router, CompliancePackageService};
use crate::workflows::payments::{
    CheckoutPlan, CheckoutSession, PaymentGateway, PaymentLookupError, PaymentStatus,
};

#[derive(Debug, Clone, Copy)]
pub(super) enum GatewayBehavior {
    Paid,
    Unpaid,
    Unreachable,
}

/// Records every session lookup and answers with a fixed behavior.
pub(super) struct FakeGateway {
    behavior: GatewayBehavior,
    lookups: Mutex<Vec<String>>,
    checkouts: Mutex<Vec<CheckoutPlan>>,
}

impl FakeGateway {
    pub(super) fn new(behavior: GatewayBehavior) -> Self {
        Self {
            behavior,
            lookups: Mutex::new(Vec::new()),
            checkouts: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lookup mutex").clone()
    }

    pub(super) fn checkouts(&self) -> Vec<CheckoutPlan> {
        self.checkouts.lock().expect("checkout mutex").clone()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn verify_payment(&self, session_id: &str) -> Result<PaymentStatus, PaymentLookupError> {
        self.lookups
            .lock()
            .expect("lookup mutex")
            .push(session_id.to_string());
        match self.behavior {
            GatewayBehavior::Paid => Ok(PaymentStatus { paid: true }),
            GatewayBehavior::Unpaid => Ok(PaymentStatus { paid: false }),
            GatewayBehavior::Unreachable => Err(PaymentLookupError::Transport(
                "connection refused".to_string(),
            )),
        }
    }

    async fn create_checkout(
        &self,
        plan: CheckoutPlan,
    ) -> Result<CheckoutSession, PaymentLookupError> {
        self.checkouts.lock().expect("checkout mutex").push(plan);
        match self.behavior {
            GatewayBehavior::Unreachable => Err(PaymentLookupError::Transport(
                "connection refused".to_string(),
            )),
            _ => Ok(CheckoutSession {
                id: "cs_test_new".to_string(),
                url: "https://checkout.example.com/c/pay/cs_test_new".to_string(),
            }),
        }
    }
}

pub(super) fn scenario_payload() -> Value {
    json!({
        "sessionId": "cs_test_1",
        "company": "Acme GmbH",
        "address": "Main St 1",
        "tools": "ChatGPT",
        "useCase": "drafting",
        "personalData": "no",
        "externalUse": "no",
        "automatedDecisions": "no",
    })
}

pub(super) fn high_risk_payload() -> Value {
    let mut payload = scenario_payload();
    payload["personalData"] = json!("regular");
    payload["externalUse"] = json!("yes");
    payload["automatedDecisions"] = json!("yes");
    payload
}

pub(super) fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object payload, got {other}"),
    }
}

pub(super) fn build_service(
    behavior: GatewayBehavior,
) -> (CompliancePackageService<FakeGateway>, Arc<FakeGateway>) {
    let gateway = Arc::new(FakeGateway::new(behavior));
    (CompliancePackageService::new(gateway.clone()), gateway)
}

pub(super) fn build_router(behavior: GatewayBehavior) -> (axum::Router, Arc<FakeGateway>) {
    let (service, gateway) = build_service(behavior);
    (compliance_router(Arc::new(service)), gateway)
}
