use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{error, info};

use crate::config::{ApiConfig, DeviceConfig};
use crate::error::ApiError;
use crate::ShadowPoster;

/// Error reply body of the dashboard API.
#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: Option<i64>,
    message: Option<String>,
}

fn parse_error_reply(body: &str) -> (Option<i64>, Option<String>) {
    serde_json::from_str::<ErrorReply>(body)
        .map(|reply| (reply.error.code, reply.error.message))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct MdashClient {
    http: reqwest::Client,
    api: ApiConfig,
    device: DeviceConfig,
}

impl MdashClient {
    #[must_use]
    pub fn new(api: ApiConfig, device: DeviceConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), api, device)
    }

    #[must_use]
    pub const fn with_http_client(
        http: reqwest::Client,
        api: ApiConfig,
        device: DeviceConfig,
    ) -> Self {
        Self { http, api, device }
    }

    fn device_url(&self, device_id: &str) -> Result<Url, ApiError> {
        let url =
            format!("{}/{}", self.api.base_url.trim_end_matches('/'), device_id);

        Url::parse(&url).map_err(|e| {
            error!("Invalid dashboard URL {}: {}", url, e);
            ApiError::Url {
                url: url.clone(),
                reason: e.to_string(),
            }
        })
    }
}

impl ShadowPoster for MdashClient {
    async fn post(&self, body: String) -> Result<(), ApiError> {
        let Some((device_id, api_key)) = self.device.credentials() else {
            error!(
                "mdash_device_id and/or api_key is not set, not sending update"
            );
            return Err(ApiError::MissingCredentials);
        };

        let url = self.device_url(device_id)?;

        let response = self
            .http
            .post(url)
            .query(&[("access_token", api_key.expose_secret())])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                info!("Failed to reach dashboard: {}", e);
                e
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_else(|e| {
            info!("Failed to read dashboard reply body: {}", e);
            String::new()
        });
        let (code, message) = parse_error_reply(&text);
        info!(
            status = status.as_u16(),
            code = ?code,
            message = ?message,
            "Dashboard rejected shadow update"
        );

        Err(ApiError::Reply {
            status: status.as_u16(),
            code,
            message,
        })
    }

    fn default_label(&self) -> &str {
        &self.device.id
    }
}
