//! Bead reference data endpoints.

use crate::error::HatxResult;
use crate::http::HttpBackend;
use crate::models::{BeadFilter, BeadQuery, BeadRecord};
use crate::url::{allele_lookup_url, endpoint_url};
use crate::validate::{require_non_empty, require_non_empty_slice};

use super::HatxClient;

impl<B: HttpBackend> HatxClient<B> {
    /// Look up bead records for a single allele.
    ///
    /// Fails validation when `allele` is empty or whitespace-only.
    pub async fn bead_by_allele(&self, allele: &str) -> HatxResult<Vec<BeadRecord>> {
        require_non_empty("allele", allele)?;
        self.backend
            .get_json(&allele_lookup_url(&self.base, "/bead", allele))
            .await
    }

    /// Look up bead records for a set of alleles.
    ///
    /// Fails validation when `query.alleles` is empty.
    pub async fn query_beads(&self, query: &BeadQuery) -> HatxResult<Vec<BeadRecord>> {
        require_non_empty_slice("alleles", &query.alleles)?;
        self.backend
            .post_json(&endpoint_url(&self.base, "/bead"), query)
            .await
    }

    /// Filter bead records by any combination of fields.
    ///
    /// No validation: an empty filter is sent as-is and the service decides
    /// what it returns.
    pub async fn filter_beads(&self, filter: &BeadFilter) -> HatxResult<Vec<BeadRecord>> {
        self.backend
            .post_json(&endpoint_url(&self.base, "/bead/filter"), filter)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::error::HatxError;
    use crate::http::testing::{CannedReply, FakeBackend, RecordedMethod};
    use serde_json::json;

    fn bead_json() -> serde_json::Value {
        json!([{"allele": "A*01:01", "manufacturer": "One Lambda", "kit": "LS1A04"}])
    }

    #[tokio::test]
    async fn test_bead_by_allele() {
        let client =
            test_client(FakeBackend::new().with_reply("/bead", CannedReply::Json(bead_json())));

        let beads = client.bead_by_allele("A*01:01").await.unwrap();

        assert_eq!(beads.len(), 1);
        assert_eq!(beads[0].manufacturer, "One Lambda");
        let requests = client.backend.requests();
        assert_eq!(requests[0].method, RecordedMethod::Get);
        assert_eq!(
            requests[0].url,
            "https://hatx.example.org/api/v1/bead?allele=A*01%3A01"
        );
    }

    #[tokio::test]
    async fn test_bead_by_allele_rejects_blank_before_dispatch() {
        let client = test_client(FakeBackend::new());

        for allele in ["", "   "] {
            let err = client.bead_by_allele(allele).await.unwrap_err();
            assert!(matches!(err, HatxError::Validation { .. }));
            assert_eq!(err.to_string(), "Expected a non-empty value for allele.");
        }
        assert!(client.backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_query_beads_posts_body_once() {
        let client =
            test_client(FakeBackend::new().with_reply("/bead", CannedReply::Json(bead_json())));

        let beads = client
            .query_beads(&BeadQuery::new(["A*01:01"]))
            .await
            .unwrap();

        assert_eq!(beads.len(), 1);
        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, RecordedMethod::Post);
        assert_eq!(requests[0].url, "https://hatx.example.org/api/v1/bead");
        assert_eq!(requests[0].body, Some(json!({"alleles": ["A*01:01"]})));
    }

    #[tokio::test]
    async fn test_query_beads_rejects_empty_alleles() {
        let client = test_client(FakeBackend::new());

        let err = client
            .query_beads(&BeadQuery { alleles: vec![] })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Expected alleles to be a non-empty array.");
        assert!(client.backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_filter_beads_sends_empty_filter_unvalidated() {
        let client = test_client(
            FakeBackend::new().with_reply("/bead/filter", CannedReply::Json(json!([]))),
        );

        let beads = client.filter_beads(&BeadFilter::default()).await.unwrap();

        assert!(beads.is_empty());
        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://hatx.example.org/api/v1/bead/filter"
        );
        assert_eq!(requests[0].body, Some(json!({})));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let client =
            test_client(FakeBackend::new().with_reply("/bead", CannedReply::Status(500)));

        let err = client
            .query_beads(&BeadQuery::new(["A*01:01"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HatxError::ApiRequestFailed { status: 500, .. }
        ));
    }
}
