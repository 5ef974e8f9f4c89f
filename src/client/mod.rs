//! HATX client facade.
//!
//! This module provides the main client interface. The client holds the
//! computed base path and the HTTP backend, both fixed at construction;
//! every endpoint method is an independent request/response round trip.

mod bead;
mod serology;
mod system;

use crate::config::HatxClientConfig;
use crate::error::{HatxError, HatxResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::join_base_path;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default HATX client using the reqwest HTTP backend.
pub type DefaultHatxClient = HatxClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the HATX HLA antigen-matching API.
///
/// Generic over an HTTP backend so tests can inject a fake transport;
/// production code uses [`DefaultHatxClient`]. The base path (base URL plus
/// API version segment) is computed once at construction and never changes.
pub struct HatxClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base: Url,
}

impl DefaultHatxClient {
    /// Create a client backed by reqwest.
    ///
    /// Fails with [`HatxError::Configuration`] when the configured base URL
    /// is empty or does not form a valid URL with the version segment.
    pub fn new(config: &HatxClientConfig) -> HatxResult<Self> {
        let base = resolve_base(config)?;
        let backend = ReqwestBackend::new(config);
        Ok(Self { backend, base })
    }
}

impl<B: HttpBackend> HatxClient<B> {
    /// Create a client with a custom HTTP backend.
    ///
    /// The backend replaces the built-in reqwest transport entirely; the
    /// configuration still supplies the base URL and version segment.
    pub fn with_backend(config: &HatxClientConfig, backend: B) -> HatxResult<Self> {
        let base = resolve_base(config)?;
        Ok(Self { backend, base })
    }

    /// The computed base path every endpoint path is appended to.
    pub fn base_path(&self) -> &str {
        self.base.as_str()
    }
}

/// Compute and parse the immutable base path from the configuration.
fn resolve_base(config: &HatxClientConfig) -> HatxResult<Url> {
    if config.base_url.trim().is_empty() {
        return Err(HatxError::Configuration {
            message: "HatxClient requires a base URL.".to_string(),
        });
    }

    let joined = join_base_path(&config.base_url, &config.version);
    Url::parse(&joined).map_err(|e| HatxError::Configuration {
        message: format!("Invalid base URL '{joined}': {e}"),
    })
}
