//! API client module

pub mod client;
pub mod endpoints;
pub mod error_decoder;

pub use client::Nyc311Client;
