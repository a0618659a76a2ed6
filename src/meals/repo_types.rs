use sqlx::FromRow;
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::session::SessionId;

/// Meal record in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub session_id: Uuid,
    pub name: String,
    pub description: String,
    pub timestamp: PrimitiveDateTime, // local wall-clock time of the meal
    pub on_diet: bool,
    pub created_at: OffsetDateTime,
}

impl Meal {
    pub fn belongs_to(&self, session: SessionId) -> bool {
        self.session_id == session.0
    }
}

/// Validated fields of a create or edit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealInput {
    pub name: String,
    pub description: String,
    pub timestamp: PrimitiveDateTime,
    pub on_diet: bool,
}
