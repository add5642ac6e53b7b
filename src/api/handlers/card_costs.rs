//! CRUD handlers for `/card-costs`.
//!
//! Handlers follow a fixed pipeline: extract → delegate to the application
//! service → map the record to its response DTO, with every failure going
//! through [`domain_error_to_response`]. Per-request timing is logged the
//! same way for every operation.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};

use crate::api::dto::requests::{CreateCardCostRequest, UpdateCardCostRequest};
use crate::api::dto::responses::CardCostResponse;
use crate::api::middleware::{ApiErrorResponse, domain_error_to_response};
use crate::infrastructure::AppDependencies;

/// POST /card-costs - Create a new card cost record.
///
/// # Response
///
/// - `200 OK` - the created record, id assigned, version 0
/// - `400 Bad Request` - invalid payload or country already exists
/// - `500 Internal Server Error`
pub async fn create_card_cost(
    State(dependencies): State<AppDependencies>,
    uri: Uri,
    Json(request): Json<CreateCardCostRequest>,
) -> Result<Json<CardCostResponse>, ApiErrorResponse> {
    let started = Instant::now();
    tracing::info!(country = %request.country, "received create card cost request");

    let record = dependencies
        .card_costs()
        .create(&request.country, request.cost)
        .await
        .map_err(|error| domain_error_to_response(error, &uri))?;

    tracing::info!(
        country = %record.country,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "create card cost request completed"
    );

    Ok(Json(CardCostResponse::from(record)))
}

/// GET /card-costs - List every card cost record.
///
/// # Response
///
/// - `200 OK` - all records
/// - `404 Not Found` - the store is empty
/// - `500 Internal Server Error`
pub async fn get_all_card_costs(
    State(dependencies): State<AppDependencies>,
    uri: Uri,
) -> Result<Json<Vec<CardCostResponse>>, ApiErrorResponse> {
    let started = Instant::now();
    tracing::info!("received get all card costs request");

    let records = dependencies
        .card_costs()
        .get_all()
        .await
        .map_err(|error| domain_error_to_response(error, &uri))?;

    tracing::info!(
        count = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "get all card costs request completed"
    );

    Ok(Json(records.into_iter().map(CardCostResponse::from).collect()))
}

/// GET /card-costs/{id} - Fetch a record by id.
///
/// # Response
///
/// - `200 OK` - the record
/// - `404 Not Found` - no record with this id
/// - `500 Internal Server Error`
pub async fn get_card_cost(
    State(dependencies): State<AppDependencies>,
    uri: Uri,
    Path(id): Path<u64>,
) -> Result<Json<CardCostResponse>, ApiErrorResponse> {
    let started = Instant::now();
    tracing::info!(id, "received get card cost request");

    let record = dependencies
        .card_costs()
        .get_by_id(id)
        .await
        .map_err(|error| domain_error_to_response(error, &uri))?;

    tracing::info!(
        id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "get card cost request completed"
    );

    Ok(Json(CardCostResponse::from(record)))
}

/// PUT /card-costs/{id} - Replace a record's country and cost.
///
/// # Response
///
/// - `200 OK` - the updated record with its version bumped
/// - `400 Bad Request` - invalid payload or a concurrent update won
/// - `404 Not Found` - no record with this id
/// - `500 Internal Server Error`
pub async fn update_card_cost(
    State(dependencies): State<AppDependencies>,
    uri: Uri,
    Path(id): Path<u64>,
    Json(request): Json<UpdateCardCostRequest>,
) -> Result<Json<CardCostResponse>, ApiErrorResponse> {
    let started = Instant::now();
    tracing::info!(id, country = %request.country, "received update card cost request");

    let record = dependencies
        .card_costs()
        .update(id, &request.country, request.cost)
        .await
        .map_err(|error| domain_error_to_response(error, &uri))?;

    tracing::info!(
        id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "update card cost request completed"
    );

    Ok(Json(CardCostResponse::from(record)))
}

/// DELETE /card-costs/{id} - Remove a record.
///
/// # Response
///
/// - `204 No Content` - record removed
/// - `404 Not Found` - no record with this id
/// - `500 Internal Server Error`
pub async fn delete_card_cost(
    State(dependencies): State<AppDependencies>,
    uri: Uri,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiErrorResponse> {
    let started = Instant::now();
    tracing::info!(id, "received delete card cost request");

    dependencies
        .card_costs()
        .delete(id)
        .await
        .map_err(|error| domain_error_to_response(error, &uri))?;

    tracing::info!(
        id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "delete card cost request completed"
    );

    Ok(StatusCode::NO_CONTENT)
}
