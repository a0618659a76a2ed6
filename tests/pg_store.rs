//! `PgMealStore` against a live Postgres. Run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use dailydiet::meals::{
    repo::{MealStore, PgMealStore},
    repo_types::MealInput,
};
use dailydiet::session::SessionId;
use time::macros::datetime;

async fn connect() -> PgMealStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgMealStore::connect(&url, 2).await.expect("connect to postgres")
}

fn input(name: &str, on_diet: bool) -> MealInput {
    MealInput {
        name: name.into(),
        description: "desc".into(),
        timestamp: datetime!(2022-01-01 12:00),
        on_diet,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_lists_in_insertion_order_per_session() {
    let store = connect().await;
    let session = SessionId::generate();
    let other = SessionId::generate();

    store.insert(session, input("first", true)).await.unwrap();
    store.insert(other, input("elsewhere", true)).await.unwrap();
    store.insert(session, input("second", false)).await.unwrap();

    let names: Vec<_> = store
        .list(session)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_scopes_mutations_to_owner() {
    let store = connect().await;
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

    assert_eq!(store.delete(owner, meal.id).await.unwrap(), 1);
    assert!(store.find(owner, meal.id).await.unwrap().is_none());
}
