use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};
use uuid::Uuid;

use crate::meals::repo_types::{Meal, MealInput};
use crate::session::SessionId;

/// Persistence of meal records. Every call is scoped by the caller's session.
#[async_trait]
pub trait MealStore: Send + Sync {
    async fn insert(&self, session: SessionId, input: MealInput) -> anyhow::Result<Meal>;

    /// Returns the number of rows changed; 0 when `id` is not owned by `session`.
    async fn update(&self, session: SessionId, id: Uuid, input: MealInput) -> anyhow::Result<u64>;

    async fn delete(&self, session: SessionId, id: Uuid) -> anyhow::Result<u64>;

    /// Meals of one session in insertion order.
    async fn list(&self, session: SessionId) -> anyhow::Result<Vec<Meal>>;

    async fn find(&self, session: SessionId, id: Uuid) -> anyhow::Result<Option<Meal>>;
}

#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            warn!(error = %e, "migration failed; continuing");
        } else {
            info!("migrations applied");
        }
        Ok(Self::new(db))
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    async fn insert(&self, session: SessionId, input: MealInput) -> anyhow::Result<Meal> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, session_id, name, description, timestamp, on_diet)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, session_id, name, description, timestamp, on_diet, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(session.0)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.timestamp)
        .bind(input.on_diet)
        .fetch_one(&self.db)
        .await
        .context("insert meal")?;
        Ok(meal)
    }

    async fn update(&self, session: SessionId, id: Uuid, input: MealInput) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE meals
               SET name = $3, description = $4, timestamp = $5, on_diet = $6
             WHERE id = $1 AND session_id = $2
            "#,
        )
        .bind(id)
        .bind(session.0)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.timestamp)
        .bind(input.on_diet)
        .execute(&self.db)
        .await
        .context("update meal")?;
        Ok(res.rows_affected())
    }

    async fn delete(&self, session: SessionId, id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query(r#"DELETE FROM meals WHERE id = $1 AND session_id = $2"#)
            .bind(id)
            .bind(session.0)
            .execute(&self.db)
            .await
            .context("delete meal")?;
        Ok(res.rows_affected())
    }

    async fn list(&self, session: SessionId) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, session_id, name, description, timestamp, on_diet, created_at
              FROM meals
             WHERE session_id = $1
             ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(session.0)
        .fetch_all(&self.db)
        .await
        .context("list meals by session")?;
        Ok(rows)
    }

    async fn find(&self, session: SessionId, id: Uuid) -> anyhow::Result<Option<Meal>> {
        let row = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, session_id, name, description, timestamp, on_diet, created_at
              FROM meals
             WHERE id = $1 AND session_id = $2
            "#,
        )
        .bind(id)
        .bind(session.0)
        .fetch_optional(&self.db)
        .await
        .context("find meal")?;
        Ok(row)
    }
}
