//! reqwest implementation of [`StudioApi`].
//!
//! Works unchanged on the host and on `wasm32-unknown-unknown`, where reqwest
//! drives the browser's `fetch`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{StudioApi, UPLOAD_FIELD, routes};
use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::model::{
    CommissionRecord, CommissionRequest, ContactMessage, ContactRecord, HealthStatus,
    ReferenceImageSet, UploadReceipt,
};

#[derive(Debug, Clone)]
pub struct HttpStudioApi {
    client: reqwest::Client,
    config: SiteConfig,
}

impl HttpStudioApi {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: SiteConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    async fn post_json<B>(&self, route: &str, body: &B) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.api_url(route);
        debug!(%url, "POST json");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| network(route, source))?;
        Ok(response)
    }
}

fn network(route: &str, source: reqwest::Error) -> ApiError {
    ApiError::Network {
        endpoint: route.to_string(),
        source,
    }
}

/// Body of a 2xx response, or [`ApiError::Rejected`] for anything else.
async fn accepted(route: &str, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let detail = match response.json::<serde_json::Value>().await {
            Ok(body) => rejection_detail(&body).unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            Err(_) => format!("HTTP {}", status.as_u16()),
        };
        return Err(ApiError::Rejected {
            endpoint: route.to_string(),
            status: status.as_u16(),
            detail,
        });
    }
    let body = response.bytes().await.map_err(|source| network(route, source))?;
    Ok(body.to_vec())
}

/// Decode a 2xx body that the caller depends on.
async fn decode<T: DeserializeOwned>(route: &str, response: reqwest::Response) -> Result<T, ApiError> {
    let body = accepted(route, response).await?;
    serde_json::from_slice(&body).map_err(|source| ApiError::Malformed {
        endpoint: route.to_string(),
        source,
    })
}

/// Any 2xx counts as success. The body is informational: an empty or
/// unexpected one falls back to `T::default()`.
async fn acknowledge<T: DeserializeOwned + Default>(
    route: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let body = accepted(route, response).await?;
    Ok(lenient_body(route, &body))
}

fn lenient_body<T: DeserializeOwned + Default>(route: &str, body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|err| {
        debug!(route, error = %err, "ignoring unexpected success body");
        T::default()
    })
}

/// FastAPI puts its reason in `detail`, as a string or a list of
/// validation errors.
fn rejection_detail(body: &serde_json::Value) -> Option<String> {
    match body.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl StudioApi for HttpStudioApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.config.api_url(routes::HEALTH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| network(routes::HEALTH, source))?;
        acknowledge(routes::HEALTH, response).await
    }

    async fn create_commission(&self, request: &CommissionRequest) -> Result<CommissionRecord, ApiError> {
        let response = self.post_json(routes::COMMISSIONS, request).await?;
        decode(routes::COMMISSIONS, response).await
    }

    async fn upload_reference_images(
        &self,
        commission_id: &str,
        images: &ReferenceImageSet,
    ) -> Result<UploadReceipt, ApiError> {
        let route = routes::upload_images(commission_id);
        let mut form = reqwest::multipart::Form::new();
        for image in images {
            let part = reqwest::multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(image.mime())
                .map_err(|source| network(&route, source))?;
            form = form.part(UPLOAD_FIELD, part);
        }

        let url = self.config.api_url(&route);
        debug!(%url, files = images.len(), bytes = images.total_bytes(), "POST multipart");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| network(&route, source))?;
        acknowledge(&route, response).await
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<ContactRecord, ApiError> {
        let response = self.post_json(routes::CONTACT, message).await?;
        acknowledge(routes::CONTACT, response).await
    }
}
