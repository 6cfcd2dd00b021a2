//! HTTP client for the Resend API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::ResendError;
use super::types::{ListEmailsResponse, SendEmailRequest, SendEmailResponse};

/// Production Resend endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

const USER_AGENT: &str = concat!("resend-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Thin async client for the Resend email endpoints.
///
/// The API key is passed per call, so one client serves every caller.
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: Client,
    base_url: String,
}

impl ResendClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The API base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send (or schedule, when `scheduled_at` is set) an email.
    #[instrument(skip_all, fields(to = %request.to, scheduled = request.scheduled_at.is_some()))]
    pub async fn send_email(
        &self,
        api_key: &str,
        request: &SendEmailRequest,
    ) -> Result<SendEmailResponse, ResendError> {
        debug!("POST {}/emails", self.base_url);

        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List emails sent from the account, newest first.
    #[instrument(skip(self, api_key))]
    pub async fn list_emails(
        &self,
        api_key: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ListEmailsResponse, ResendError> {
        debug!("GET {}/emails", self.base_url);

        let response = self
            .http
            .get(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Map a response to its success body or an API error.
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ResendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Resend API returned {}: {}", status, body);
            return Err(ResendError::api(status.as_u16(), &body));
        }

        debug!("Resend API response received: {} bytes", body.len());

        serde_json::from_str(&body)
            .map_err(|e| ResendError::InvalidResponse(format!("JSON parse error: {e}")))
    }
}

impl Default for ResendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
