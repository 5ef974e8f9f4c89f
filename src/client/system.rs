//! System health, info and changelog endpoints.

use crate::error::HatxResult;
use crate::http::HttpBackend;
use crate::models::{SystemHealth, SystemInfo};
use crate::url::endpoint_url;

use super::HatxClient;

impl<B: HttpBackend> HatxClient<B> {
    /// Fetch the service health status map.
    pub async fn system_health(&self) -> HatxResult<SystemHealth> {
        self.backend
            .get_json(&endpoint_url(&self.base, "/system/health"))
            .await
    }

    /// Fetch service metadata (title, description, version).
    pub async fn system_info(&self) -> HatxResult<SystemInfo> {
        self.backend
            .get_json(&endpoint_url(&self.base, "/system/info"))
            .await
    }

    /// Fetch the service changelog as raw text.
    pub async fn system_changelog(&self) -> HatxResult<String> {
        self.backend
            .get_text(&endpoint_url(&self.base, "/system/changelog"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::http::testing::{CannedReply, FakeBackend, RecordedMethod};
    use serde_json::json;

    #[tokio::test]
    async fn test_system_health() {
        let client = test_client(FakeBackend::new().with_reply(
            "/system/health",
            CannedReply::Json(json!({"database": "ok", "reference_data": "ok"})),
        ));

        let health = client.system_health().await.unwrap();

        assert_eq!(health.get("database").map(String::as_str), Some("ok"));
        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, RecordedMethod::Get);
        assert_eq!(
            requests[0].url,
            "https://hatx.example.org/api/v1/system/health"
        );
    }

    #[tokio::test]
    async fn test_system_info_with_partial_fields() {
        let client = test_client(
            FakeBackend::new()
                .with_reply("/system/info", CannedReply::Json(json!({"title": "hatx"}))),
        );

        let info = client.system_info().await.unwrap();

        assert_eq!(info.title.as_deref(), Some("hatx"));
        assert!(info.version.is_none());
    }

    #[tokio::test]
    async fn test_system_changelog_is_raw_text() {
        let client = test_client(FakeBackend::new().with_reply(
            "/system/changelog",
            CannedReply::Text("## v1.2\n- serotype v3 tables".to_string()),
        ));

        let changelog = client.system_changelog().await.unwrap();

        assert!(changelog.starts_with("## v1.2"));
    }
}
