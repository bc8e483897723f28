use super::MealPlanRequest;

pub const DAILY_CALORIES: u32 = 1500;

pub fn build_prompt(request: &MealPlanRequest) -> String {
    let allergies = if request.allergies.is_empty() {
        "none".to_string()
    } else {
        request.allergies.join(", ")
    };

    format!(
        "I am a {age}-year-old person on a {diet} diet.\n\
         I am allergic to {allergies}.\n\
         My goal is {goal}.\n\
         Generate a detailed {calories}-calorie meal plan for breakfast, lunch, and dinner with nutritional explanation.\n",
        age = request.age,
        diet = request.diet,
        allergies = allergies,
        goal = request.goal,
        calories = DAILY_CALORIES,
    )
}
