use super::mocks::{MockDatasetSource, MockTextGenerator};
use mealplan_server::{
    config::{Config, StorageConfig, WatsonxConfig},
    planner::MealPlanner,
    server::{self, handlers::AppState},
};
use axum::Router;
use std::sync::Arc;

pub const WATSONX_API_KEY: &str = "wx-api-key";
pub const COS_API_KEY: &str = "cos-api-key";
pub const PROJECT_ID: &str = "proj-1234";
pub const MODEL_ID: &str = "ibm/granite-13b-instruct-v2";
pub const BUCKET: &str = "nutrition";
pub const OBJECT_KEY: &str = "foods.csv";

pub const SAMPLE_DATASET: &str = "food,calories,protein\noats,389,16.9\nlentils,352,24.6\n";

/// Build a router backed by mock upstream clients
pub fn create_mock_app(generator: MockTextGenerator, dataset: MockDatasetSource) -> Router {
    let planner = MealPlanner::new(Arc::new(generator), Arc::new(dataset));
    server::router(AppState { planner })
}

/// Configuration pointing every upstream call at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        watsonx: WatsonxConfig {
            api_key: Some(WATSONX_API_KEY.to_string()),
            project_id: Some(PROJECT_ID.to_string()),
            region: Some("us-south".to_string()),
            model_id: Some(MODEL_ID.to_string()),
            base_url: Some(base_url.to_string()),
            iam_url: format!("{}/identity/token", base_url),
            ..WatsonxConfig::default()
        },
        storage: StorageConfig {
            api_key: Some(COS_API_KEY.to_string()),
            instance_id: Some("crn:v1:bluemix:public:cloud-object-storage:global:a/1::".to_string()),
            endpoint: Some(base_url.to_string()),
            bucket: Some(BUCKET.to_string()),
            object_key: Some(OBJECT_KEY.to_string()),
            ..StorageConfig::default()
        },
        ..Config::default()
    }
}

pub fn object_path() -> String {
    format!("/{}/{}", BUCKET, OBJECT_KEY)
}
