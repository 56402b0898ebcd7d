//! HTTP handlers for `/clients`.
//!
//! Each handler extracts its inputs, makes exactly one `ClientService` call,
//! and maps the outcome to a status code. Failures carry the request path so
//! the error body can report it.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ResourceError;
use crate::model::ClientDto;
use crate::page::{Page, PageParams};
use crate::service::SharedService;

#[derive(Debug, Deserialize)]
pub struct IncomeParam {
    pub income: f64,
}

#[derive(Debug, Deserialize)]
pub struct CpfParam {
    pub cpf: String,
}

/// Routes for the client resource. Collection routes answer with and without
/// the trailing slash.
pub fn routes() -> Router<SharedService> {
    Router::new()
        .route("/clients", get(find_all).post(insert))
        .route("/clients/", get(find_all).post(insert))
        .route("/clients/id/{id}", get(find_by_id))
        .route("/clients/income", get(find_by_income))
        .route("/clients/income/", get(find_by_income))
        .route("/clients/incomeGreaterThan", get(find_by_income_greater_than))
        .route("/clients/incomeGreaterThan/", get(find_by_income_greater_than))
        .route("/clients/cpf", get(find_by_cpf_like))
        .route("/clients/cpf/", get(find_by_cpf_like))
        .route("/clients/{id}", put(update).delete(delete))
}

async fn find_all(
    State(service): State<SharedService>,
    Query(params): Query<PageParams>,
) -> Json<Page<ClientDto>> {
    Json(service.find_all_paged(params.into()).await)
}

async fn find_by_id(
    State(service): State<SharedService>,
    Path(id): Path<i64>,
    uri: Uri,
) -> Result<Json<ClientDto>, ResourceError> {
    service
        .find_by_id(id)
        .await
        .map(Json)
        .map_err(|e| ResourceError::new(e, uri.path()))
}

async fn find_by_income(
    State(service): State<SharedService>,
    Query(params): Query<PageParams>,
    Query(IncomeParam { income }): Query<IncomeParam>,
) -> Json<Page<ClientDto>> {
    Json(service.find_by_income(params.into(), income).await)
}

async fn find_by_income_greater_than(
    State(service): State<SharedService>,
    Query(params): Query<PageParams>,
    Query(IncomeParam { income }): Query<IncomeParam>,
) -> Json<Page<ClientDto>> {
    Json(service.find_by_income_greater_than(params.into(), income).await)
}

async fn find_by_cpf_like(
    State(service): State<SharedService>,
    Query(params): Query<PageParams>,
    Query(CpfParam { cpf }): Query<CpfParam>,
) -> Json<Page<ClientDto>> {
    Json(service.find_by_cpf_like(params.into(), cpf).await)
}

async fn insert(
    State(service): State<SharedService>,
    Json(dto): Json<ClientDto>,
) -> impl IntoResponse {
    let created = service.insert(dto).await;
    let location = created
        .id
        .map(|id| format!("/clients/id/{id}"))
        .unwrap_or_else(|| "/clients/".to_string());
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(created))
}

async fn update(
    State(service): State<SharedService>,
    Path(id): Path<i64>,
    uri: Uri,
    Json(dto): Json<ClientDto>,
) -> Result<Json<ClientDto>, ResourceError> {
    service
        .update(id, dto)
        .await
        .map(Json)
        .map_err(|e| ResourceError::new(e, uri.path()))
}

async fn delete(
    State(service): State<SharedService>,
    Path(id): Path<i64>,
    uri: Uri,
) -> Result<StatusCode, ResourceError> {
    service
        .delete(id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|e| ResourceError::new(e, uri.path()))
}
