//! URL construction helpers for the HATX API.
//!
//! This module provides pure functions for building HATX API URLs,
//! ensuring consistent URL construction across all API calls.

use url::Url;

/// Join a base URL and an API version segment into the base path.
///
/// Trailing slashes are stripped from the base URL and surrounding slashes
/// from the version, so any slash combination yields the same result.
pub fn join_base_path(base_url: &str, version: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        version.trim_matches('/')
    )
}

/// Build a URL for an endpoint path under the base path.
///
/// `path` must start with `/` (e.g. `/bead/filter`).
pub fn endpoint_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}{path}"));
    url
}

/// Build a GET-by-allele URL with the `allele` query parameter.
pub fn allele_lookup_url(base: &Url, path: &str, allele: &str) -> Url {
    let mut url = endpoint_url(base, path);
    url.query_pairs_mut().append_pair("allele", allele);
    url
}

/// Build the serotype lookup URL.
///
/// The `version` parameter is only present when the caller supplied one.
pub fn serotype_lookup_url(base: &Url, allele: &str, version: Option<i64>) -> Url {
    let mut url = endpoint_url(base, "/serotype");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("allele", allele);
        if let Some(version) = version {
            pairs.append_pair("version", &version.to_string());
        }
    }
    url
}
