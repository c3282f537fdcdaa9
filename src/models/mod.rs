//! Data models for the NYC 311 service-request API

pub mod codes;
pub mod common;
pub mod payload;
pub mod service_request;

pub use codes::*;
pub use common::*;
pub use payload::*;
pub use service_request::*;
