//! REST API endpoints for the NYC 311 gateway

use serde::Serialize;

/// Gateway origin all requests are routed through
pub const DEFAULT_GATEWAY_URL: &str = "https://api.nyc.gov";

/// Header carrying the subscription key on every request
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// API endpoint paths
pub mod paths {
    pub const CREATE_SERVICE_REQUEST: &str = "/create-sr/api/CreateServiceRequest";
    pub const GET_SERVICE_REQUEST: &str = "/public/api/GetServiceRequest";
}

/// Query string for `GetServiceRequest`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRequestQuery<'a> {
    #[serde(rename = "SRNumber")]
    pub sr_number: &'a str,
}
