pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::dataset::handlers as dataset;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Dataset API
        .route(
            "/api/v1/dataset",
            get(dataset::handle_get_dataset)
                .post(dataset::handle_upload)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/dataset/companies",
            get(dataset::handle_list_companies),
        )
        // Analysis API
        .route("/api/v1/taxonomy", get(analysis::handle_taxonomy))
        .route("/api/v1/analysis", post(analysis::handle_analysis))
        .with_state(state)
}
