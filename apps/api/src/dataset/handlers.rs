//! Axum route handlers for the Dataset API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::columns::DEFAULT_COMPANY_COLUMN;
use crate::dataset::filter::list_companies;
use crate::dataset::ingest::parse_csv;
use crate::dataset::models::{Dataset, DatasetSummary};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the CSV export.
const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompanyQuery {
    pub company_column: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub column: String,
    pub companies: Vec<String>,
    /// The first company, preselected in the dashboard.
    pub default_selection: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/dataset
///
/// Accepts a multipart upload with a `file` field and replaces the loaded dataset.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DatasetSummary>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let source = field.file_name().unwrap_or("upload.csv").to_string();
        let bytes = field.bytes().await?;
        info!("Received upload '{source}' ({} bytes)", bytes.len());

        let dataset = state.replace_dataset(parse_csv(&bytes, &source)?).await;
        return Ok(Json(dataset.summary()));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// GET /api/v1/dataset
pub async fn handle_get_dataset(
    State(state): State<AppState>,
) -> Result<Json<DatasetSummary>, AppError> {
    let dataset = state.current_dataset().await?;
    Ok(Json(dataset.summary()))
}

/// GET /api/v1/dataset/companies
///
/// Lists the company names available for filtering.
pub async fn handle_list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<CompaniesResponse>, AppError> {
    let dataset = state.current_dataset().await?;
    companies_response(&dataset, query.company_column.as_deref()).map(Json)
}

fn companies_response(
    dataset: &Dataset,
    company_column: Option<&str>,
) -> Result<CompaniesResponse, AppError> {
    let column = company_column
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_COMPANY_COLUMN);
    let index = dataset
        .column_index(column)
        .ok_or_else(|| AppError::Validation(format!("Column '{column}' does not exist")))?;

    let companies = list_companies(dataset, index);
    if companies.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No company names found in column '{column}'"
        )));
    }

    Ok(CompaniesResponse {
        column: column.to_string(),
        default_selection: vec![companies[0].clone()],
        companies,
    })
}
