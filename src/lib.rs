#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod url;
mod validate;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultHatxClient, HatxClient};

// Configuration
pub use config::HatxClientConfig;

// Errors
pub use error::{HatxError, HatxResult};

// Transport abstraction
pub use http::{HttpBackend, ReqwestBackend};

// Request/response types
pub use models::{
    BeadFilter, BeadQuery, BeadRecord, SerologicalQuery, SerologicalRecord, SerotypeFilter,
    SerotypeQuery, SerotypeRecord, SystemHealth, SystemInfo,
};
