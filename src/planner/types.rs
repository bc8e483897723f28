use serde::{Deserialize, Serialize};
use serde_json::Number;

/// User attributes a meal plan is generated for.
///
/// Missing or `null` fields take their defaults; values are otherwise passed
/// through unchecked. `age` keeps whatever JSON number was sent, so `30.5`
/// reaches the prompt as written. Unknown fields are dropped, so echoing this
/// back always shows the resolved request rather than the raw body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequestBody")]
pub struct MealPlanRequest {
    pub age: Number,
    pub diet: String,
    pub goal: String,
    pub allergies: Vec<String>,
}

// Wire shape of the request body; `null` and absent collapse to `None`.
#[derive(Deserialize)]
struct RequestBody {
    #[serde(default)]
    age: Option<Number>,
    #[serde(default)]
    diet: Option<String>,
    #[serde(default)]
    goal: Option<String>,
    #[serde(default)]
    allergies: Option<Vec<String>>,
}

impl From<RequestBody> for MealPlanRequest {
    fn from(body: RequestBody) -> Self {
        Self {
            age: body.age.unwrap_or_else(default_age),
            diet: body.diet.unwrap_or_else(default_diet),
            goal: body.goal.unwrap_or_else(default_goal),
            allergies: body.allergies.unwrap_or_default(),
        }
    }
}

impl Default for MealPlanRequest {
    fn default() -> Self {
        Self {
            age: default_age(),
            diet: default_diet(),
            goal: default_goal(),
            allergies: Vec::new(),
        }
    }
}

fn default_age() -> Number {
    Number::from(25)
}

fn default_diet() -> String {
    "vegetarian".to_string()
}

fn default_goal() -> String {
    "weight loss".to_string()
}
