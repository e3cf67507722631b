//! AirtableClient - REST implementation of [`RecordClient`].

use super::dto::RecordPage;
use async_trait::async_trait;
use marquee_core::config::RemoteConfig;
use marquee_core::error::{MarqueeError, Result};
use marquee_core::record::{RawRecord, RecordClient};
use marquee_core::secret::API_KEY_NAME;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use serde_json::{Map, Value};

/// Client for the Airtable REST API.
///
/// The bearer token is fixed at construction. Without one, every call fails
/// with a configuration error before anything is sent.
#[derive(Clone)]
pub struct AirtableClient {
    client: Client,
    tables_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct PatchRequest<'a> {
    fields: &'a Map<String, Value>,
}

impl AirtableClient {
    pub fn new(remote: &RemoteConfig, api_key: Option<String>) -> Self {
        Self::with_http_client(Client::new(), remote, api_key)
    }

    /// Uses a preconfigured reqwest client (proxy, timeouts, tests).
    pub fn with_http_client(client: Client, remote: &RemoteConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            tables_url: remote.tables_url(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Appends `segments` to the tables URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.tables_url).map_err(|err| {
            MarqueeError::configuration(format!("Invalid base URL {}: {}", self.tables_url, err))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                MarqueeError::configuration(format!("Base URL {} cannot take a path", self.tables_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn resource_url(&self, resource: &str) -> Result<Url> {
        self.endpoint(&[resource.trim_matches('/')])
    }

    fn record_url(&self, resource: &str, id: &str) -> Result<Url> {
        self.endpoint(&[resource.trim_matches('/'), id])
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            MarqueeError::configuration(format!(
                "API key is missing. Set {} in secret.json or the environment.",
                API_KEY_NAME
            ))
        })?;

        Ok(request
            .bearer_auth(api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json"))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| MarqueeError::transport(format!("Request failed: {err}")))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            tracing::warn!("Remote error {}: {}", status, body);
            return Err(MarqueeError::remote(status.as_u16(), body));
        }

        Ok(response)
    }
}

#[async_trait]
impl RecordClient for AirtableClient {
    async fn fetch(&self, resource: &str) -> Result<Vec<RawRecord>> {
        let url = self.resource_url(resource)?;
        tracing::debug!("GET {}", url);
        let request = self.authorize(self.client.get(url))?;

        let response = self.send(request).await?;

        let page: RecordPage = response
            .json()
            .await
            .map_err(|err| MarqueeError::decode(format!("Failed to parse {resource} response: {err}")))?;

        if page.offset.is_some() {
            tracing::warn!(
                "{} has more records than one page; only the first {} were read",
                resource,
                page.records.len()
            );
        }

        tracing::debug!("Decoded {} {} records", page.records.len(), resource);
        Ok(page.records)
    }

    async fn patch(&self, resource: &str, id: &str, fields: Map<String, Value>) -> Result<()> {
        let url = self.record_url(resource, id)?;
        tracing::debug!("PATCH {} ({} fields)", url, fields.len());
        let request = self.authorize(self.client.patch(url))?;

        self.send(request.json(&PatchRequest { fields: &fields })).await?;
        Ok(())
    }
}
