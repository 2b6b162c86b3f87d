//! Report builder — runs the matcher, tokenizer and counter over a filtered
//! subset and packages the results as chart descriptors for the dashboard.

use serde::Serialize;

use crate::analysis::frequency::{top_terms, WordFrequency, TOP_TERMS};
use crate::analysis::keywords::{count_categories, CategoryCount, CategorySet, Taxonomy};
use crate::analysis::tokenizer::{corpus_text, tokenize};
use crate::dataset::models::{Posting, ResolvedColumns};

pub const NOT_ENOUGH_TEXT: &str = "Not enough text found for a keyword analysis.";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Vertical bar chart of postings per JD-R category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colour: String,
    pub bars: Vec<CategoryCount>,
}

/// Horizontal bar chart of the most frequent terms.
#[derive(Debug, Clone, Serialize)]
pub struct TermChart {
    pub x_label: String,
    pub y_label: String,
    /// Highest count first, as computed.
    pub terms: Vec<WordFrequency>,
    /// Lowest count first, so the largest bar renders on top.
    pub display_order: Vec<WordFrequency>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub dataset_id: uuid::Uuid,
    pub columns: ResolvedColumns,
    pub selected_companies: Vec<String>,
    pub posting_count: usize,
    pub demands: CategoryChart,
    pub resources: CategoryChart,
    pub top_terms: Option<TermChart>,
    pub notice: Option<String>,
    pub postings: Vec<Posting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

/// Demands and Resources category counts for a subset.
pub fn category_charts(
    postings: &[Posting],
    taxonomy: &Taxonomy,
) -> (CategoryChart, CategoryChart) {
    (
        category_chart(postings, &taxonomy.demands, "Type Eis"),
        category_chart(postings, &taxonomy.resources, "Type Steun"),
    )
}

fn category_chart(postings: &[Posting], set: &CategorySet, x_label: &str) -> CategoryChart {
    CategoryChart {
        title: format!("Gevonden '{}'", set.name()),
        x_label: x_label.to_string(),
        y_label: "Aantal vacatures".to_string(),
        colour: set.colour().to_string(),
        bars: count_categories(postings, set),
    }
}

/// Top-term chart for a subset, or `None` when no term survives filtering.
pub fn term_chart(postings: &[Posting]) -> Option<TermChart> {
    let text = corpus_text(postings.iter().map(|p| p.description.as_str()));
    let tokens = tokenize(&text);
    let terms = top_terms(&tokens, TOP_TERMS);
    if terms.is_empty() {
        return None;
    }

    let mut display_order = terms.clone();
    // stable: equal counts keep their relative order
    display_order.sort_by_key(|w| w.count);

    Some(TermChart {
        x_label: "Frequentie".to_string(),
        y_label: "Woord".to_string(),
        terms,
        display_order,
    })
}

/// Full analysis of one filtered subset.
pub fn build_report(
    dataset_id: uuid::Uuid,
    columns: ResolvedColumns,
    selected_companies: Vec<String>,
    postings: Vec<Posting>,
    taxonomy: &Taxonomy,
) -> AnalysisReport {
    let (demands, resources) = category_charts(&postings, taxonomy);
    let top_terms = term_chart(&postings);
    let notice = top_terms.is_none().then(|| NOT_ENOUGH_TEXT.to_string());

    AnalysisReport {
        dataset_id,
        columns,
        selected_companies,
        posting_count: postings.len(),
        demands,
        resources,
        top_terms,
        notice,
        postings,
    }
}
