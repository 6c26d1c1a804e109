use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use super::gateway::{
    CheckoutPlan, CheckoutSession, CheckoutSessionSnapshot, PaymentGateway, PaymentLookupError,
    PaymentStatus,
};
use crate::config::{ConfigError, PaymentConfig};

const CHECKOUT_SESSIONS_PATH: &str = "/v1/checkout/sessions";

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatedSession {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

/// Stripe Checkout client over the REST API.
pub struct StripeClient {
    http: Client,
    secret_key: String,
    api_base: String,
    one_time_price: Option<String>,
    subscription_price: Option<String>,
    base_url: String,
}

impl StripeClient {
    pub fn new(http: Client, config: &PaymentConfig) -> Result<Self, ConfigError> {
        let secret_key = config.require_secret_key()?.to_string();
        Ok(Self {
            http,
            secret_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            one_time_price: config.one_time_price.clone(),
            subscription_price: config.subscription_price.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn from_config(config: &PaymentConfig) -> Result<Self, ConfigError> {
        Self::new(Client::new(), config)
    }

    fn price_for(&self, plan: CheckoutPlan) -> Result<&str, PaymentLookupError> {
        let price = match plan {
            CheckoutPlan::OneTime => self.one_time_price.as_deref(),
            CheckoutPlan::Subscription => self.subscription_price.as_deref(),
        };
        price.ok_or(match plan {
            CheckoutPlan::OneTime => PaymentLookupError::NotConfigured("STRIPE_PRICE_ONE_TIME"),
            CheckoutPlan::Subscription => PaymentLookupError::NotConfigured("STRIPE_PRICE_SUB"),
        })
    }

    async fn error_from(response: reqwest::Response) -> PaymentLookupError {
        let status = response.status();
        let message = match response.json::<StripeErrorBody>().await {
            Ok(body) => body
                .error
                .message
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };
        if status == StatusCode::NOT_FOUND {
            PaymentLookupError::UnknownSession(message)
        } else {
            PaymentLookupError::Provider(message)
        }
    }
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

fn transport_error(err: reqwest::Error) -> PaymentLookupError {
    PaymentLookupError::Transport(err.to_string())
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn verify_payment(&self, session_id: &str) -> Result<PaymentStatus, PaymentLookupError> {
        let url = format!("{}{}/{}", self.api_base, CHECKOUT_SESSIONS_PATH, session_id);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = Self::error_from(response).await;
            warn!(error = %err, "checkout session lookup failed");
            return Err(err);
        }

        let snapshot: CheckoutSessionSnapshot =
            response.json().await.map_err(transport_error)?;
        let paid = snapshot.is_paid();
        info!(
            mode = snapshot.mode.as_deref().unwrap_or("unknown"),
            paid, "checkout session verified"
        );
        Ok(PaymentStatus { paid })
    }

    async fn create_checkout(
        &self,
        plan: CheckoutPlan,
    ) -> Result<CheckoutSession, PaymentLookupError> {
        let price = self.price_for(plan)?;
        let success_url = format!(
            "{}/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.base_url
        );
        let cancel_url = format!("{}/", self.base_url);
        let form = [
            ("mode", plan.session_mode()),
            ("line_items[0][price]", price),
            ("line_items[0][quantity]", "1"),
            ("success_url", success_url.as_str()),
            ("cancel_url", cancel_url.as_str()),
            ("billing_address_collection", "auto"),
            ("allow_promotion_codes", "true"),
        ];

        let response = self
            .http
            .post(format!("{}{}", self.api_base, CHECKOUT_SESSIONS_PATH))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = Self::error_from(response).await;
            warn!(error = %err, mode = plan.session_mode(), "checkout session creation failed");
            return Err(err);
        }

        let created: CreatedSession = response.json().await.map_err(transport_error)?;
        let url = created
            .url
            .ok_or_else(|| PaymentLookupError::Provider("checkout session has no url".into()))?;
        info!(mode = plan.session_mode(), "checkout session created");
        Ok(CheckoutSession {
            id: created.id,
            url,
        })
    }
}
