use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PaymentLookupError {
    #[error("checkout session not found: {0}")]
    UnknownSession(String),
    #[error("payment provider rejected the request: {0}")]
    Provider(String),
    #[error("payment provider unreachable: {0}")]
    Transport(String),
    #[error("checkout is not configured: {0}")]
    NotConfigured(&'static str),
}

/// Outcome of a payment-status lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentStatus {
    pub paid: bool,
}

/// Purchase options offered by the hosted checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPlan {
    OneTime,
    Subscription,
}

impl CheckoutPlan {
    /// `"sub"` selects the subscription; every other value buys once.
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode.map(str::trim) {
            Some("sub") => Self::Subscription,
            _ => Self::OneTime,
        }
    }

    pub fn session_mode(self) -> &'static str {
        match self {
            Self::OneTime => "payment",
            Self::Subscription => "subscription",
        }
    }
}

/// Redirect target for a freshly created checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// The fields of a checkout session that decide whether it counts as paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutSessionSnapshot {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub subscription: Option<serde_json::Value>,
}

impl CheckoutSessionSnapshot {
    /// One-time payments must be marked paid; subscriptions need a subscription object.
    pub fn is_paid(&self) -> bool {
        match self.mode.as_deref() {
            Some("payment") => self.payment_status.as_deref() == Some("paid"),
            Some("subscription") => self
                .subscription
                .as_ref()
                .is_some_and(|subscription| !subscription.is_null()),
            _ => false,
        }
    }
}

/// Seam over the hosted checkout provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn verify_payment(&self, session_id: &str) -> Result<PaymentStatus, PaymentLookupError>;

    async fn create_checkout(&self, plan: CheckoutPlan)
        -> Result<CheckoutSession, PaymentLookupError>;
}
