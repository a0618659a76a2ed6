use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::meals::repo::MealStore;
use crate::meals::repo_types::{Meal, MealInput};
use crate::session::SessionId;

/// `MealStore` kept in process memory. Rows stay in insertion order.
#[derive(Default)]
pub struct InMemoryMealStore {
    rows: RwLock<Vec<Meal>>,
}

impl InMemoryMealStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealStore for InMemoryMealStore {
    async fn insert(&self, session: SessionId, input: MealInput) -> anyhow::Result<Meal> {
        let meal = Meal {
            id: Uuid::new_v4(),
            session_id: session.0,
            name: input.name,
            description: input.description,
            timestamp: input.timestamp,
            on_diet: input.on_diet,
            created_at: OffsetDateTime::now_utc(),
        };
        self.rows.write().await.push(meal.clone());
        Ok(meal)
    }

    async fn update(&self, session: SessionId, id: Uuid, input: MealInput) -> anyhow::Result<u64> {
        let mut rows = self.rows.write().await;
        let Some(meal) = rows.iter_mut().find(|m| m.id == id && m.belongs_to(session)) else {
            return Ok(0);
        };
        meal.name = input.name;
        meal.description = input.description;
        meal.timestamp = input.timestamp;
        meal.on_diet = input.on_diet;
        Ok(1)
    }

    async fn delete(&self, session: SessionId, id: Uuid) -> anyhow::Result<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|m| !(m.id == id && m.belongs_to(session)));
        Ok((before - rows.len()) as u64)
    }

    async fn list(&self, session: SessionId) -> anyhow::Result<Vec<Meal>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|m| m.belongs_to(session)).cloned().collect())
    }

    async fn find(&self, session: SessionId, id: Uuid) -> anyhow::Result<Option<Meal>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|m| m.id == id && m.belongs_to(session)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn input(name: &str, on_diet: bool) -> MealInput {
        MealInput {
            name: name.into(),
            description: "desc".into(),
            timestamp: datetime!(2022-01-01 11:00),
            on_diet,
        }
    }

    #[tokio::test]
    async fn list_is_scoped_to_session_and_ordered() {
        let store = InMemoryMealStore::new();
        let a = SessionId::generate();
        let b = SessionId::generate();

        store.insert(a, input("first", true)).await.unwrap();
        store.insert(b, input("other", true)).await.unwrap();
        store.insert(a, input("second", false)).await.unwrap();

        let names: Vec<_> = store
            .list(a)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.list(b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_and_delete_require_owning_session() {
        let store = InMemoryMealStore::new();
        let owner = SessionId::generate();
        let stranger = SessionId::generate();
        let meal = store.insert(owner, input("mine", true)).await.unwrap();

        assert_eq!(store.update(stranger, meal.id, input("stolen", false)).await.unwrap(), 0);
        assert_eq!(store.delete(stranger, meal.id).await.unwrap(), 0);
        assert!(store.find(stranger, meal.id).await.unwrap().is_none());

        assert_eq!(store.update(owner, meal.id, input("edited", false)).await.unwrap(), 1);
        let edited = store.find(owner, meal.id).await.unwrap().unwrap();
        assert_eq!(edited.name, "edited");
        assert!(!edited.on_diet);
        assert_eq!(edited.created_at, meal.created_at);

        assert_eq!(store.delete(owner, meal.id).await.unwrap(), 1);
        assert_eq!(store.delete(owner, meal.id).await.unwrap(), 0);
    }
}
