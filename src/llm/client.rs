use super::types::*;
use crate::{Error, Result, auth::IamTokenClient, config::WatsonxConfig};
use async_trait::async_trait;
use tracing::debug;

const GENERATION_PATH: &str = "/ml/v1/text/generation";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// watsonx.ai text generation over REST.
pub struct WatsonxClient {
    http: reqwest::Client,
    tokens: IamTokenClient,
    config: WatsonxConfig,
}

impl WatsonxClient {
    pub fn new(http: reqwest::Client, tokens: IamTokenClient, config: WatsonxConfig) -> Self {
        Self {
            http,
            tokens,
            config,
        }
    }

    fn generation_url(&self) -> Result<String> {
        let base = match &self.config.base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => {
                let region = required(&self.config.region, "REGION")?;
                format!("https://{}.ml.cloud.ibm.com", region)
            }
        };
        Ok(format!("{}{}", base, GENERATION_PATH))
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::config(format!("{} is not set", name)))
}

#[async_trait]
impl TextGenerator for WatsonxClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = required(&self.config.api_key, "API_KEY")?;
        let request = GenerationRequest {
            model_id: required(&self.config.model_id, "MODEL_ID")?.to_string(),
            project_id: required(&self.config.project_id, "PROJECT_ID")?.to_string(),
            input: prompt.to_string(),
        };
        let url = self.generation_url()?;

        let token = self.tokens.fetch_token(api_key).await?;

        debug!(
            "Requesting generation from {} with model {} ({} prompt chars)",
            url,
            request.model_id,
            request.input.len()
        );

        let response = self
            .http
            .post(&url)
            .query(&[("version", self.config.api_version.as_str())])
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::inference(format!("Failed to send generation request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "Generation request failed with status {}: {}",
                status, body
            )));
        }

        let generation: GenerationResponse = response
            .json()
            .await
            .map_err(|e| Error::inference(format!("Failed to parse generation response: {}", e)))?;

        debug!(
            "Received generation response with {} results",
            generation.results.len()
        );

        generation
            .into_first_text()
            .ok_or_else(|| Error::inference("inference response contained no results"))
    }
}
