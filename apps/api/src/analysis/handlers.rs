//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{CategorySet, Taxonomy};
use crate::analysis::report::{build_report, AnalysisReport};
use crate::dataset::columns::resolve_mapping;
use crate::dataset::filter::{filter_postings, list_companies};
use crate::dataset::models::{ColumnSelection, Dataset};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub columns: ColumnSelection,
    /// Companies to include. Omitted means the first company only.
    pub companies: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub label: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorySetView {
    pub name: String,
    pub colour: String,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub demands: CategorySetView,
    pub resources: CategorySetView,
}

impl From<&CategorySet> for CategorySetView {
    fn from(set: &CategorySet) -> Self {
        Self {
            name: set.name().to_string(),
            colour: set.colour().to_string(),
            categories: set
                .categories()
                .iter()
                .map(|c| CategoryView {
                    label: c.label().to_string(),
                    keywords: c.keywords().to_vec(),
                })
                .collect(),
        }
    }
}

/// GET /api/v1/taxonomy
///
/// The fixed JD-R keyword lists, for chart legends.
pub async fn handle_taxonomy(State(state): State<AppState>) -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        demands: (&state.taxonomy.demands).into(),
        resources: (&state.taxonomy.resources).into(),
    })
}

/// POST /api/v1/analysis
///
/// JD-R keyword counts and top terms for the selected companies.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let dataset = state.current_dataset().await?;
    analyze(&dataset, request, &state.taxonomy).map(Json)
}

/// Resolves columns, filters by company and runs the analysis core.
///
/// An empty subset never reaches the core: it is reported to the user instead.
pub fn analyze(
    dataset: &Dataset,
    request: AnalysisRequest,
    taxonomy: &Taxonomy,
) -> Result<AnalysisReport, AppError> {
    let (mapping, columns) = resolve_mapping(dataset, &request.columns)?;

    let companies = list_companies(dataset, mapping.company);
    if companies.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No company names found in column '{}'",
            columns.company
        )));
    }

    let selected = match request.companies {
        Some(selected) if selected.is_empty() => {
            return Err(AppError::Validation(
                "Select at least one company".to_string(),
            ))
        }
        Some(selected) => selected,
        None => vec![companies[0].clone()],
    };

    let postings = filter_postings(dataset, &mapping, &selected);
    if postings.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No postings match the selected companies".to_string(),
        ));
    }

    debug!(
        "Analysing {} postings for {} companies",
        postings.len(),
        selected.len()
    );

    Ok(build_report(dataset.id, columns, selected, postings, taxonomy))
}
