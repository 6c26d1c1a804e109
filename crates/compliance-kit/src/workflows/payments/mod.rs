//! Hosted checkout: payment verification and checkout session creation.

pub mod gateway;
pub mod stripe;

pub use gateway::{
    CheckoutPlan, CheckoutSession, CheckoutSessionSnapshot, PaymentGateway, PaymentLookupError,
    PaymentStatus,
};
pub use stripe::StripeClient;
