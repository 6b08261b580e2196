//! Client for the Alexa In-Skill Products service.

use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Url;
use tracing::{debug, error, info, warn};

use crate::config::IspConfig;
use crate::products::{InSkillProduct, InSkillProductResponse, IN_SKILL_PRODUCTS_PATH};
use crate::request::Request;
use crate::{Error, Result};

/// Client for listing the current user's in-skill products.
///
/// Holds one HTTP client for the life of the process. Settings are fixed at
/// construction; build a new client to change them.
#[derive(Debug, Clone)]
pub struct IspClient {
    http: reqwest::Client,
    config: IspConfig,
}

impl IspClient {
    /// Create a new ISP client.
    pub fn new(config: IspConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::RequestConstruction(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &IspConfig {
        &self.config
    }

    /// Build the product list request for a skill invocation without sending it.
    pub fn build_request(&self, request: &Request) -> Result<reqwest::Request> {
        let system = &request.context.system;

        if system.api_endpoint.trim().is_empty() {
            return Err(Error::RequestConstruction(
                "Request has no apiEndpoint".to_string(),
            ));
        }
        if system.api_access_token.trim().is_empty() {
            return Err(Error::RequestConstruction(
                "Request has no apiAccessToken".to_string(),
            ));
        }

        let url = products_url(&system.api_endpoint)?;

        if self.config.debug_logging {
            debug!(endpoint = %url, "Generating request for ISP endpoint");
        }

        self.http
            .get(url)
            .header(ACCEPT_LANGUAGE, request.locale().as_str())
            .bearer_auth(&system.api_access_token)
            .build()
            .map_err(|e| Error::RequestConstruction(e.to_string()))
    }

    /// Fetch the in-skill products visible to the user behind `request`.
    ///
    /// Makes exactly one call. Only the first page is returned when the
    /// service reports a truncated list.
    pub async fn fetch_products(&self, request: &Request) -> Result<Vec<InSkillProduct>> {
        if self.config.debug_logging {
            debug!("Entering fetch_products");
        }

        let outbound = self.build_request(request)?;

        if self.config.debug_logging {
            debug!(method = %outbound.method(), url = %outbound.url(), "Performing request");
        }

        let response = self.http.execute(outbound).await.map_err(|e| {
            error!(error = %e, "ISP request failed");
            Error::from_send(e)
        })?;

        let status = response.status();
        if self.config.debug_logging {
            debug!(status = status.as_u16(), "Request completed");
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "ISP service rejected request: {}", body);
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(e)
            } else {
                Error::Body(e)
            }
        })?;

        if self.config.debug_logging {
            let text = String::from_utf8_lossy(&body);
            debug!(body = %text, "Body retrieved");
        }

        let envelope: InSkillProductResponse = serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "Failed to decode ISP response");
            Error::Decode(e)
        })?;

        if envelope.is_truncated {
            let next_token = envelope.next_token.as_deref().unwrap_or("");
            warn!(next_token, "ISP product list is truncated; only the first page is used");
        }

        let count = envelope.in_skill_products.len();
        info!(products = count, "Retrieved in-skill products");

        Ok(envelope.in_skill_products)
    }
}

/// Join the request's API endpoint and the ISP path.
fn products_url(api_endpoint: &str) -> Result<Url> {
    let raw = format!("{}{}", api_endpoint.trim_end_matches('/'), IN_SKILL_PRODUCTS_PATH);

    let url = Url::parse(&raw)
        .map_err(|e| Error::RequestConstruction(format!("Invalid apiEndpoint {}: {}", api_endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::RequestConstruction(format!(
            "Unsupported apiEndpoint scheme: {}",
            scheme
        ))),
    }
}
