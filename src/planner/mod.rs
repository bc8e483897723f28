mod prompt;
mod types;

pub use prompt::{DAILY_CALORIES, build_prompt};
pub use types::MealPlanRequest;

use crate::{Result, llm::TextGenerator, storage::DatasetSource};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs the generation pipeline for one request: load the reference
/// dataset, build the prompt, ask the model.
#[derive(Clone)]
pub struct MealPlanner {
    generator: Arc<dyn TextGenerator>,
    dataset: Arc<dyn DatasetSource>,
}

impl MealPlanner {
    pub fn new(generator: Arc<dyn TextGenerator>, dataset: Arc<dyn DatasetSource>) -> Self {
        Self { generator, dataset }
    }

    pub async fn plan(&self, request: &MealPlanRequest) -> Result<String> {
        // Loaded and validated on every request, but not part of the prompt.
        let dataset = self.dataset.fetch_dataset().await?;
        debug!(
            "Dataset loaded: {} rows x {} columns",
            dataset.row_count(),
            dataset.column_count()
        );

        let prompt = build_prompt(request);
        let meal_plan = self.generator.generate(&prompt).await?;

        info!("Generated meal plan ({} chars)", meal_plan.len());
        Ok(meal_plan)
    }
}
