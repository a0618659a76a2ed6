use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{MealBody, MealEnvelope, MealListResponse, MetricsResponse};
use super::repo_types::MealInput;
use super::services::session_metrics;
use super::validate::{INVALID_BODY, INVALID_MEAL_ID};
use crate::{
    error::AppError,
    session::{cookies::session_cookie, SessionId},
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/metrics", get(get_metrics))
        .route(
            "/meals/:id",
            get(get_meal).put(edit_meal).delete(delete_meal),
        )
}

fn meal_input(body: Result<Json<MealBody>, JsonRejection>) -> Result<MealInput, AppError> {
    let Json(body) = body.map_err(|e| {
        warn!(error = %e, "rejected meal body");
        AppError::validation(INVALID_BODY)
    })?;
    MealInput::try_from(body)
}

fn meal_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::validation(INVALID_MEAL_ID))
}

/// POST /meals
/// Opens a session (Set-Cookie) when the caller does not carry one yet.
#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    session: Option<SessionId>,
    body: Result<Json<MealBody>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<MealEnvelope>), AppError> {
    let input = meal_input(body)?;

    let mut headers = HeaderMap::new();
    let session = match session {
        Some(s) => s,
        None => {
            let s = SessionId::generate();
            headers.insert(header::SET_COOKIE, session_cookie(&state.config.session, s)?);
            info!(session = %s, "session opened");
            s
        }
    };

    let meal = state.store.insert(session, input).await?;
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&format!("/meals/{}", meal.id)).map_err(anyhow::Error::from)?,
    );

    info!(%session, meal_id = %meal.id, "meal created");
    Ok((
        StatusCode::CREATED,
        headers,
        Json(MealEnvelope { meal: meal.into() }),
    ))
}

/// PUT /meals/:id
#[instrument(skip(state, body))]
pub async fn edit_meal(
    State(state): State<AppState>,
    session: SessionId,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<MealBody>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = meal_id(id)?;
    let input = meal_input(body)?;

    let updated = state.store.update(session, id, input).await?;
    if updated == 0 {
        return Err(AppError::NoRecordToModify);
    }
    info!(%session, meal_id = %id, "meal edited");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /meals/:id
/// Succeeds whether or not the meal existed.
#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    session: SessionId,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = meal_id(id)?;
    let deleted = state.store.delete(session, id).await?;
    info!(%session, meal_id = %id, deleted, "meal delete");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /meals
#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<MealListResponse>, AppError> {
    let meals = state.store.list(session).await?;
    Ok(Json(MealListResponse {
        meals: meals.into_iter().map(Into::into).collect(),
    }))
}

/// GET /meals/:id
#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    session: SessionId,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MealEnvelope>, AppError> {
    let id = meal_id(id)?;
    let meal = state
        .store
        .find(session, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(MealEnvelope { meal: meal.into() }))
}

/// GET /meals/metrics
#[instrument(skip(state))]
pub async fn get_metrics(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<MetricsResponse>, AppError> {
    let metrics = session_metrics(state.store.as_ref(), session).await?;
    Ok(Json(MetricsResponse { metrics }))
}
