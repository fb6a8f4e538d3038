//! Item handlers — create, list, get, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use notebin_core::error::AppError;
use notebin_entity::item::NewItem;

use crate::dto::request::CreateItemRequest;
use crate::dto::response::ItemResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// POST /items/
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let record = state
        .item_service
        .create(
            auth.context(),
            NewItem {
                title: req.title,
                content: req.content,
                expiration_date: req.expiration_date,
            },
        )
        .await?;

    Ok(Json(record.into()))
}

/// GET /items/
///
/// Public listing; expired items are filtered out.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let records = state.item_service.list(&params.into_range()).await?;

    Ok(Json(records.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/{id}
///
/// Requires authentication but not ownership. Returns the item even if it
/// has already expired; only the listing filters on expiration.
pub async fn get_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let record = state.item_service.get(id).await?;

    Ok(Json(record.into()))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.item_service.delete(auth.context(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
