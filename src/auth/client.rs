use crate::{Error, Result};
use serde::Deserialize;
use tracing::debug;

pub const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchanges IBM Cloud API keys for short-lived IAM bearer tokens.
///
/// Tokens are not cached: each call performs one round trip to the
/// identity endpoint.
#[derive(Debug, Clone)]
pub struct IamTokenClient {
    http: reqwest::Client,
    token_url: String,
}

impl IamTokenClient {
    pub fn new(http: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            http,
            token_url: token_url.into(),
        }
    }

    pub async fn fetch_token(&self, api_key: &str) -> Result<String> {
        debug!("Requesting IAM token from {}", self.token_url);

        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("apikey", api_key), ("grant_type", APIKEY_GRANT_TYPE)])
            .send()
            .await
            .map_err(|e| Error::auth(format!("Failed to send IAM token request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "IAM token request failed with status {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::auth(format!("Failed to parse IAM token response: {}", e)))?;

        match token.access_token {
            Some(access_token) if !access_token.is_empty() => {
                debug!("IAM token acquired");
                Ok(access_token)
            }
            _ => Err(Error::auth("IAM token response missing access_token field")),
        }
    }
}
