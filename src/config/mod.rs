//! Client configuration

pub mod settings;

pub use settings::{ClientConfig, SubscriptionKey, GATEWAY_URL_ENV, SUBSCRIPTION_KEY_ENV};
