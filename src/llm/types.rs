use serde::{Deserialize, Serialize};

/// Body of a watsonx.ai `text/generation` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model_id: String,
    pub project_id: String,
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub results: Vec<GenerationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub generated_text: String,
    #[serde(default)]
    pub generated_token_count: Option<u32>,
    #[serde(default)]
    pub input_token_count: Option<u32>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl GenerationResponse {
    /// Text of the first result; later results are ignored.
    pub fn into_first_text(self) -> Option<String> {
        self.results
            .into_iter()
            .next()
            .map(|result| result.generated_text)
    }
}
