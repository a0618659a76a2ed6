use tracing::debug;

use crate::meals::dto::Metrics;
use crate::meals::repo::MealStore;
use crate::meals::repo_types::Meal;
use crate::meals::streak::{best_streak, DietEntry};
use crate::session::SessionId;

/// Counts and best streak over one snapshot of a session's meals.
pub fn compute_metrics(meals: &[Meal]) -> Metrics {
    let total_meals = meals.len();
    let meals_on_diet = meals.iter().filter(|m| m.on_diet).count();
    let meals_off_diet = meals.iter().filter(|m| !m.on_diet).count();
    let entries: Vec<DietEntry> = meals.iter().map(DietEntry::from).collect();

    Metrics {
        total_meals,
        meals_on_diet,
        meals_off_diet,
        best_on_diet_streak: best_streak(&entries),
    }
}

pub async fn session_metrics(store: &dyn MealStore, session: SessionId) -> anyhow::Result<Metrics> {
    let meals = store.list(session).await?;
    let metrics = compute_metrics(&meals);
    debug!(%session, ?metrics, "metrics computed");
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::memory::InMemoryMealStore;
    use crate::meals::repo_types::MealInput;
    use time::macros::datetime;

    #[test]
    fn empty_history_yields_zeroes() {
        assert_eq!(
            compute_metrics(&[]),
            Metrics {
                total_meals: 0,
                meals_on_diet: 0,
                meals_off_diet: 0,
                best_on_diet_streak: 0,
            }
        );
    }

    #[tokio::test]
    async fn metrics_for_a_day_of_meals() {
        let store = InMemoryMealStore::new();
        let session = SessionId::generate();
        let day = [
            (datetime!(2022-01-01 14:00), true),
            (datetime!(2022-01-01 11:00), true),
            (datetime!(2022-01-01 13:00), false),
            (datetime!(2022-01-01 12:00), true),
        ];
        for (i, (timestamp, on_diet)) in day.into_iter().enumerate() {
            let input = MealInput {
                name: format!("meal {i}"),
                description: String::new(),
                timestamp,
                on_diet,
            };
            store.insert(session, input).await.unwrap();
        }
        // another session's meals never count
        store
            .insert(
                SessionId::generate(),
                MealInput {
                    name: "elsewhere".into(),
                    description: String::new(),
                    timestamp: datetime!(2022-01-01 13:30),
                    on_diet: true,
                },
            )
            .await
            .unwrap();

        let metrics = session_metrics(&store, session).await.unwrap();
        assert_eq!(
            metrics,
            Metrics {
                total_meals: 4,
                meals_on_diet: 3,
                meals_off_diet: 1,
                best_on_diet_streak: 2,
            }
        );
    }
}
