use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::meals::repo_types::Meal;

time::serde::format_description!(
    meal_timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

/// Request body for creating or editing a meal.
#[derive(Debug, Deserialize)]
pub struct MealBody {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub on_diet: bool,
}

/// Meal as returned to the client.
#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "meal_timestamp")]
    pub timestamp: PrimitiveDateTime,
    pub on_diet: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Meal> for MealResponse {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            timestamp: m.timestamp,
            on_diet: m.on_diet,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<MealResponse>,
}

#[derive(Debug, Serialize)]
pub struct MealEnvelope {
    pub meal: MealResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_meals: usize,
    pub meals_on_diet: usize,
    pub meals_off_diet: usize,
    pub best_on_diet_streak: usize,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: Metrics,
}
