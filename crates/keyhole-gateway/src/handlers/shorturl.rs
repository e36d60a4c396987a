use crate::error::{ApiError, Result};
use crate::model::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use keyhole_core::ShortId;

pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Form(request): Form<CreateShortUrlRequest>,
) -> Result<Json<CreateShortUrlResponse>> {
    let shortened = state.shortener().submit(&request.url).await?;

    Ok(Json(CreateShortUrlResponse {
        original_url: shortened.original_url,
        short_url: shortened.short_id.to_string(),
    }))
}

pub async fn redirect_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // A malformed hash can never name a stored record.
    let id = ShortId::new(hash).map_err(|_| ApiError::NotFound)?;

    match state.redirector().resolve(&id).await? {
        Some(target) => Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response()),
        None => Err(ApiError::NotFound),
    }
}
