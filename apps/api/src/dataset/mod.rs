// Dataset shell: CSV ingestion, column-role mapping and company filtering.
// Everything here runs before the analysis core and hands it a clean subset.

pub mod columns;
pub mod filter;
pub mod handlers;
pub mod ingest;
pub mod models;
