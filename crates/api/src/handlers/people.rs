//! Handlers for the `/people` resource and its owned starships and vehicles.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_db::models::person::{Person, PersonInput};
use swapi_db::models::starship::Starship;
use swapi_db::models::vehicle::Vehicle;
use swapi_db::repositories::{PersonRepo, StarshipRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, Pagination, PersonId};
use crate::response::{ListResponse, PageMetadata};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "People",
        id,
    })
}

/// GET /people?page=&per_page=
pub async fn list(
    State(state): State<AppState>,
    Pagination(params): Pagination,
) -> AppResult<Json<ListResponse<Person>>> {
    let page = params.resolve()?;

    let data = PersonRepo::find_all(&state.db, page.page, page.per_page).await?;
    let total = PersonRepo::count(&state.db).await?;

    Ok(Json(ListResponse {
        metadata: PageMetadata {
            page: page.page,
            per_page: page.per_page,
            total,
        },
        data,
    }))
}

/// GET /people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(person))
}

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PersonInput>,
) -> AppResult<(StatusCode, Json<Person>)> {
    input.validate()?;
    let person = PersonRepo::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /people/{id}
///
/// Full replace of every mutable field; answers with the stored record.
pub async fn update(
    State(state): State<AppState>,
    PersonId(id): PersonId,
    JsonBody(input): JsonBody<PersonInput>,
) -> AppResult<Json<Person>> {
    input.validate()?;

    if !PersonRepo::update(&state.db, id, &input).await? {
        return Err(not_found(id));
    }

    let person = PersonRepo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(person))
}

/// DELETE /people/{id}
///
/// Answers 204 whether or not the person existed.
pub async fn delete(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<StatusCode> {
    PersonRepo::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /people/{id}/starships
pub async fn list_starships(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<Json<Vec<Starship>>> {
    let starships = StarshipRepo::list_by_person(&state.db, id).await?;
    Ok(Json(starships))
}

/// GET /people/{id}/vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = VehicleRepo::list_by_person(&state.db, id).await?;
    Ok(Json(vehicles))
}
