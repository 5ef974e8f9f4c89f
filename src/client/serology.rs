//! Serological and serotype reference data endpoints.

use crate::error::HatxResult;
use crate::http::HttpBackend;
use crate::models::{
    SerologicalQuery, SerologicalRecord, SerotypeFilter, SerotypeQuery, SerotypeRecord,
};
use crate::url::{allele_lookup_url, endpoint_url, serotype_lookup_url};
use crate::validate::{require_non_empty, require_non_empty_slice};

use super::HatxClient;

impl<B: HttpBackend> HatxClient<B> {
    /// Look up serological records for a single allele.
    ///
    /// Fails validation when `allele` is empty or whitespace-only.
    pub async fn serological_by_allele(&self, allele: &str) -> HatxResult<Vec<SerologicalRecord>> {
        require_non_empty("allele", allele)?;
        self.backend
            .get_json(&allele_lookup_url(&self.base, "/serological", allele))
            .await
    }

    /// Look up serological records for a set of alleles.
    ///
    /// Fails validation when `query.alleles` is empty.
    pub async fn query_serological(
        &self,
        query: &SerologicalQuery,
    ) -> HatxResult<Vec<SerologicalRecord>> {
        require_non_empty_slice("alleles", &query.alleles)?;
        self.backend
            .post_json(&endpoint_url(&self.base, "/serological"), query)
            .await
    }

    /// Look up serotype records for a single allele, optionally pinned to a
    /// reference data version.
    ///
    /// The `version` query parameter is only sent when the caller supplied
    /// one. Fails validation when `allele` is empty or whitespace-only.
    pub async fn serotype_by_allele(
        &self,
        allele: &str,
        version: Option<i64>,
    ) -> HatxResult<Vec<SerotypeRecord>> {
        require_non_empty("allele", allele)?;
        self.backend
            .get_json(&serotype_lookup_url(&self.base, allele, version))
            .await
    }

    /// Look up serotype records for a set of alleles.
    ///
    /// Fails validation when `query.alleles` is empty.
    pub async fn query_serotype(&self, query: &SerotypeQuery) -> HatxResult<Vec<SerotypeRecord>> {
        require_non_empty_slice("alleles", &query.alleles)?;
        self.backend
            .post_json(&endpoint_url(&self.base, "/serotype"), query)
            .await
    }

    /// Filter serotype records by any combination of fields.
    ///
    /// No validation: an empty filter is sent as-is.
    pub async fn filter_serotype(
        &self,
        filter: &SerotypeFilter,
    ) -> HatxResult<Vec<SerotypeRecord>> {
        self.backend
            .post_json(&endpoint_url(&self.base, "/serotype/filter"), filter)
            .await
    }
}
