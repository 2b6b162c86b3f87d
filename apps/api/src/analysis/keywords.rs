//! Keyword Matcher — counts postings per JD-R category.
//!
//! Every category compiles to a single case-insensitive alternation of its
//! keywords. Keywords are escaped, so matching is literal substring matching:
//! "9-to-5" only matches the text "9-to-5", and "pressure" also matches
//! "highpressure".

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

use crate::dataset::models::Posting;

// ────────────────────────────────────────────────────────────────────────────
// Taxonomy definition
// ────────────────────────────────────────────────────────────────────────────

/// Bar colour for the Demands chart.
pub const DEMANDS_COLOUR: &str = "#E74C3C";
/// Bar colour for the Resources chart.
pub const RESOURCES_COLOUR: &str = "#27AE60";

const DEMANDS: &[(&str, &[&str])] = &[
    (
        "Werkdruk/Stress",
        &["stress", "druk", "pressure", "deadlines", "tempo", "pace", "targets"],
    ),
    (
        "Flexibiliteit",
        &[
            "flexibel",
            "flexible",
            "no 9-to-5",
            "geen 9-tot-5",
            "avonden",
            "weekends",
            "shift",
        ],
    ),
    (
        "Complexiteit",
        &[
            "dynamisch",
            "dynamic",
            "fast-paced",
            "uitdagend",
            "challenging",
            "complex",
        ],
    ),
];

const RESOURCES: &[(&str, &[&str])] = &[
    (
        "Ontwikkeling",
        &[
            "opleiding",
            "training",
            "development",
            "ontwikkeling",
            "coaching",
            "learning",
            "groei",
        ],
    ),
    (
        "Balans",
        &[
            "balans",
            "balance",
            "thuiswerk",
            "remote",
            "home office",
            "flex-time",
            "glijdende",
        ],
    ),
    (
        "Ondersteuning",
        &[
            "team",
            "sfeer",
            "vrijheid",
            "freedom",
            "autonomie",
            "autonomy",
            "collega",
            "support",
        ],
    ),
];

#[derive(Debug, Error, PartialEq)]
pub enum TaxonomyError {
    #[error("Category '{0}' has no keywords")]
    EmptyCategory(String),

    #[error("Category '{0}' contains a blank keyword")]
    BlankKeyword(String),

    #[error("Category label cannot be empty")]
    EmptyLabel,

    #[error("Failed to compile pattern for category '{label}': {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },
}

/// A named group of keywords representing one JD-R factor.
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    label: String,
    keywords: Vec<String>,
    pattern: Regex,
}

impl KeywordCategory {
    /// Builds a category, rejecting empty keyword lists and blank keywords.
    pub fn new<S: Into<String>>(label: S, keywords: &[&str]) -> Result<Self, TaxonomyError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(TaxonomyError::EmptyLabel);
        }
        if keywords.is_empty() {
            return Err(TaxonomyError::EmptyCategory(label));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(TaxonomyError::BlankKeyword(label));
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|source| TaxonomyError::Pattern {
                label: label.clone(),
                source,
            })?;

        Ok(Self {
            label,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            pattern,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if `text` contains at least one keyword of this category.
    pub fn matches(&self, text: &str) -> bool {
        !text.is_empty() && self.pattern.is_match(text)
    }
}

/// An ordered list of categories rendered together as one chart.
#[derive(Debug, Clone)]
pub struct CategorySet {
    name: String,
    colour: String,
    categories: Vec<KeywordCategory>,
}

impl CategorySet {
    pub fn new<S: Into<String>>(
        name: S,
        colour: S,
        categories: Vec<KeywordCategory>,
    ) -> Self {
        Self {
            name: name.into(),
            colour: colour.into(),
            categories,
        }
    }

    fn from_table(
        name: &str,
        colour: &str,
        table: &[(&str, &[&str])],
    ) -> Result<Self, TaxonomyError> {
        let categories = table
            .iter()
            .map(|(label, keywords)| KeywordCategory::new(*label, keywords))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, colour, categories))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }
}

/// Demands and Resources category sets. Built once at startup and passed
/// into the matcher explicitly.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    pub demands: CategorySet,
    pub resources: CategorySet,
}

impl Taxonomy {
    /// The fixed bilingual (NL + EN) JD-R taxonomy.
    pub fn jdr() -> Result<Self, TaxonomyError> {
        Ok(Self {
            demands: CategorySet::from_table("Demands", DEMANDS_COLOUR, DEMANDS)?,
            resources: CategorySet::from_table("Resources", RESOURCES_COLOUR, RESOURCES)?,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Number of postings whose description matches a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Counts, per category and in declared order, the postings whose description
/// contains at least one of the category's keywords.
pub fn count_categories(postings: &[Posting], set: &CategorySet) -> Vec<CategoryCount> {
    set.categories()
        .iter()
        .map(|category| CategoryCount {
            label: category.label().to_string(),
            count: postings
                .iter()
                .filter(|p| category.matches(&p.description))
                .count(),
        })
        .collect()
}
