use super::types::MealPlanResponse;
use crate::{Error, planner::MealPlanRequest, planner::MealPlanner};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub planner: MealPlanner,
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<MealPlanRequest>, JsonRejection>,
) -> Result<Json<MealPlanResponse>, Error> {
    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);

    async move {
        let Json(request) = payload.map_err(|rejection| {
            error!("Rejected request body: {}", rejection.body_text());
            Error::request(rejection.body_text())
        })?;

        info!(
            "Received meal plan request: age={}, diet={}, goal={}, {} allergies",
            request.age,
            request.diet,
            request.goal,
            request.allergies.len()
        );

        match state.planner.plan(&request).await {
            Ok(meal_plan) => {
                info!("Meal plan request completed");
                Ok(Json(MealPlanResponse {
                    input: request,
                    meal_plan,
                }))
            }
            Err(e) => {
                error!("Failed to generate meal plan: {}", e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}
