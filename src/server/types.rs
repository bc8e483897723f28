use crate::planner::MealPlanRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub input: MealPlanRequest,
    pub meal_plan: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
