//! Handlers for bird records.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{RawQuery, State};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use birdwatch_core::bird::{Bird, CreateBird};

use crate::error::{AppError, AppResult};
use crate::form::FormValues;
use crate::state::AppState;

/// Where a successful form submission sends the browser.
pub const LANDING_PATH: &str = "/assets/";

/// GET /bird
///
/// List every stored bird as a bare JSON array of
/// `{ "species", "description" }` objects.
pub async fn list_birds(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let birds = state.store.get_birds().await?;
    let body = serde_json::to_vec(&birds)?;

    Ok(([(CONTENT_TYPE, "application/json")], body))
}

/// POST /bird
///
/// Record a bird from the submitted form, then redirect to the landing page
/// with `302 Found`.
///
/// Fields are read from an `application/x-www-form-urlencoded` body and then
/// from the query string; the first value wins and absent fields are stored
/// as empty strings. A body of any other content type is ignored. Broken
/// escapes in either source answer 500 without touching the store.
pub async fn create_bird(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<impl IntoResponse> {
    let body = body.map_err(|rejection| {
        AppError::InternalError(format!("Failed to read bird form: {rejection}"))
    })?;
    let form = FormValues::from_request(&headers, query.as_deref(), &body)?;

    let input = CreateBird {
        species: form.get("species").to_owned(),
        description: form.get("description").to_owned(),
    };
    let bird = Bird::from(input);
    state.store.create_bird(&bird).await?;

    tracing::info!(
        species = %bird.species,
        description = %bird.description,
        "Bird recorded",
    );

    Ok((StatusCode::FOUND, [(LOCATION, LANDING_PATH)]))
}
