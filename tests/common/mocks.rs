use async_trait::async_trait;
use mealplan_server::{Error, Result, llm::TextGenerator, storage::Dataset, storage::DatasetSource};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Mock text generator for testing
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub response: String,
    pub error: Option<String>,
}

impl MockTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            response: response.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.response.clone())
    }
}

/// Mock dataset source for testing
#[derive(Debug, Clone)]
pub struct MockDatasetSource {
    pub calls: Arc<AtomicUsize>,
    pub error: Option<String>,
}

impl MockDatasetSource {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDatasetSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetSource for MockDatasetSource {
    async fn fetch_dataset(&self) -> Result<Dataset> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref error) = self.error {
            return Err(Error::storage(error.clone()));
        }

        Dataset::from_csv(b"food,calories\noats,389\n")
    }
}
