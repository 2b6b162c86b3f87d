use std::collections::BTreeSet;

use crate::dataset::models::{ColumnMapping, Dataset, Posting};

/// Sorted, unique, non-empty company names in the given column.
pub fn list_companies(dataset: &Dataset, company_column: usize) -> Vec<String> {
    dataset
        .rows
        .iter()
        .map(|row| row[company_column].as_str())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Projects the rows whose company is one of `companies` onto postings,
/// preserving dataset order.
pub fn filter_postings(
    dataset: &Dataset,
    mapping: &ColumnMapping,
    companies: &[String],
) -> Vec<Posting> {
    dataset
        .rows
        .iter()
        .filter(|row| companies.iter().any(|c| *c == row[mapping.company]))
        .map(|row| Posting {
            company: row[mapping.company].clone(),
            position: optional_cell(row, mapping.position),
            rating: optional_cell(row, mapping.rating),
            description: row[mapping.description].clone(),
        })
        .collect()
}

fn optional_cell(row: &[String], index: Option<usize>) -> String {
    index.map(|i| row[i].clone()).unwrap_or_default()
}
