//! Route handlers for the stub marketplace API

use crate::error::{ErrorResponse, Rejection};
use crate::server::AppState;
use crate::store::{StoredItem, StoredStatistics};
use crate::validation::{parse_seller_id, validate_create_request, validate_item_id};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use log::{error, trace};

#[tracing::instrument(level = "debug", skip_all)]
pub async fn create_item(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoredItem>, Rejection> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        error!("POST /api/1/item malformed body: {e}");
        ErrorResponse::malformed_body(&e.to_string()).into_rejection()
    })?;
    let request = validate_create_request(&value).map_err(|error_response| {
        error!(
            "POST /api/1/item validation failed: {}",
            error_response.message
        );
        error_response.into_rejection()
    })?;
    let item = app_state.store.insert(
        request.seller_id,
        request.name,
        request.price,
        request.statistics,
    );
    trace!(
        "POST /api/1/item - created {} for seller {}",
        item.id, item.seller_id
    );
    Ok(Json(item))
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn get_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoredItem>>, Rejection> {
    validate_item_id(&id).map_err(ErrorResponse::into_rejection)?;
    match app_state.store.get(&id) {
        Some(item) => {
            trace!("GET /api/1/item/{id} - found");
            Ok(Json(vec![item]))
        }
        None => {
            trace!("GET /api/1/item/{id} - not found");
            Err(ErrorResponse::item_not_found(&id).into_rejection())
        }
    }
}

pub async fn get_item_without_id() -> Rejection {
    trace!("GET /api/1/item/ - missing id");
    ErrorResponse::invalid_parameter("id", "", "Item id is required").into_rejection()
}

#[tracing::instrument(level = "debug", skip_all, fields(seller_id = %seller_id))]
pub async fn get_seller_items(
    State(app_state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<Vec<StoredItem>>, Rejection> {
    let seller_id = parse_seller_id(&seller_id).map_err(|error_response| {
        error!(
            "GET /api/1/{seller_id}/item validation failed: {}",
            error_response.message
        );
        error_response.into_rejection()
    })?;
    let items = app_state.store.by_seller(seller_id);
    trace!("GET /api/1/{seller_id}/item - {} items", items.len());
    Ok(Json(items))
}

/// Shared lookup for both statistics versions.
///
/// Only the status for a malformed id differs between versions.
fn lookup_statistics(
    app_state: &AppState,
    id: &str,
    malformed_status: StatusCode,
) -> Result<Json<Vec<StoredStatistics>>, Rejection> {
    if let Err(error_response) = validate_item_id(id) {
        let (_, body) = error_response.into_rejection();
        return Err((malformed_status, body));
    }
    match app_state.store.get(id) {
        Some(item) => Ok(Json(vec![item.statistics])),
        None => Err(ErrorResponse::item_not_found(id).into_rejection()),
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn get_statistic_v1(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoredStatistics>>, Rejection> {
    lookup_statistics(&app_state, &id, StatusCode::BAD_REQUEST)
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn get_statistic_v2(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoredStatistics>>, Rejection> {
    lookup_statistics(&app_state, &id, StatusCode::NOT_FOUND)
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, Rejection> {
    validate_item_id(&id).map_err(ErrorResponse::into_rejection)?;
    match app_state.store.remove(&id) {
        Some(_) => {
            trace!("DELETE /api/2/item/{id} - deleted");
            Ok(StatusCode::OK)
        }
        None => Err(ErrorResponse::item_not_found(&id).into_rejection()),
    }
}
