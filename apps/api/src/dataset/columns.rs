//! Column-role resolution — maps user-chosen column names onto a dataset header.

use thiserror::Error;

use crate::dataset::models::{ColumnMapping, ColumnSelection, Dataset, ResolvedColumns};

pub const DEFAULT_DESCRIPTION_COLUMN: &str = "description";
pub const DEFAULT_COMPANY_COLUMN: &str = "company";
pub const DEFAULT_RATING_COLUMN: &str = "companyInfo/rating";
pub const DEFAULT_POSITION_COLUMN: &str = "positionName";

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("Column '{column}' selected for {role} does not exist")]
    UnknownColumn { role: &'static str, column: String },

    #[error("No column selected for {role} and default column '{default}' is missing")]
    Unresolved {
        role: &'static str,
        default: &'static str,
    },
}

/// Suggests a selection for a header: each role gets its default column if
/// present.
pub fn suggest_selection(columns: &[String]) -> ColumnSelection {
    let pick = |name: &str| columns.iter().find(|c| *c == name).cloned();
    ColumnSelection {
        description: pick(DEFAULT_DESCRIPTION_COLUMN),
        company: pick(DEFAULT_COMPANY_COLUMN),
        rating: pick(DEFAULT_RATING_COLUMN),
        position: pick(DEFAULT_POSITION_COLUMN),
    }
}

/// Resolves a selection against the dataset header.
///
/// Description and company are required. Rating and position are optional
/// display columns: an explicitly chosen name must exist, but a missing
/// default simply leaves the role unmapped.
pub fn resolve_mapping(
    dataset: &Dataset,
    selection: &ColumnSelection,
) -> Result<(ColumnMapping, ResolvedColumns), MappingError> {
    let description = resolve_required(
        dataset,
        "description",
        selection.description.as_deref(),
        DEFAULT_DESCRIPTION_COLUMN,
    )?;
    let company = resolve_required(
        dataset,
        "company",
        selection.company.as_deref(),
        DEFAULT_COMPANY_COLUMN,
    )?;
    let rating = resolve_optional(
        dataset,
        "rating",
        selection.rating.as_deref(),
        DEFAULT_RATING_COLUMN,
    )?;
    let position = resolve_optional(
        dataset,
        "position",
        selection.position.as_deref(),
        DEFAULT_POSITION_COLUMN,
    )?;

    let name = |i: usize| dataset.columns[i].clone();
    let resolved = ResolvedColumns {
        description: name(description),
        company: name(company),
        rating: rating.map(name),
        position: position.map(name),
    };

    Ok((
        ColumnMapping {
            description,
            company,
            rating,
            position,
        },
        resolved,
    ))
}

fn resolve_required(
    dataset: &Dataset,
    role: &'static str,
    chosen: Option<&str>,
    default: &'static str,
) -> Result<usize, MappingError> {
    resolve_optional(dataset, role, chosen, default)?
        .ok_or(MappingError::Unresolved { role, default })
}

fn resolve_optional(
    dataset: &Dataset,
    role: &'static str,
    chosen: Option<&str>,
    default: &'static str,
) -> Result<Option<usize>, MappingError> {
    match chosen.map(str::trim).filter(|c| !c.is_empty()) {
        Some(column) => dataset
            .column_index(column)
            .map(Some)
            .ok_or_else(|| MappingError::UnknownColumn {
                role,
                column: column.to_string(),
            }),
        None => Ok(dataset.column_index(default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn dataset(columns: &[&str]) -> Dataset {
        Dataset {
            id: Uuid::new_v4(),
            source: "test.csv".to_string(),
            loaded_at: Utc::now(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: vec![],
        }
    }

    #[test]
    fn test_defaults_resolve_for_indeed_export() {
        let ds = dataset(&["positionName", "company", "companyInfo/rating", "description"]);
        let (mapping, resolved) = resolve_mapping(&ds, &ColumnSelection::default()).unwrap();
        assert_eq!(
            mapping,
            ColumnMapping {
                description: 3,
                company: 1,
                rating: Some(2),
                position: Some(0),
            }
        );
        assert_eq!(resolved.rating.as_deref(), Some("companyInfo/rating"));
    }

    #[test]
    fn test_explicit_selection_overrides_defaults() {
        let ds = dataset(&["description", "company", "vacaturetekst", "bedrijf"]);
        let selection = ColumnSelection {
            description: Some("vacaturetekst".to_string()),
            company: Some("bedrijf".to_string()),
            ..Default::default()
        };
        let (mapping, resolved) = resolve_mapping(&ds, &selection).unwrap();
        assert_eq!(mapping.description, 2);
        assert_eq!(mapping.company, 3);
        assert_eq!(resolved.company, "bedrijf");
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let ds = dataset(&["description", "company"]);
        let selection = ColumnSelection {
            company: Some("werkgever".to_string()),
            ..Default::default()
        };
        let err = resolve_mapping(&ds, &selection).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownColumn {
                role: "company",
                column: "werkgever".to_string()
            }
        );
    }

    #[test]
    fn test_missing_required_default_is_rejected() {
        let ds = dataset(&["text", "company"]);
        let err = resolve_mapping(&ds, &ColumnSelection::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::Unresolved {
                role: "description",
                default: DEFAULT_DESCRIPTION_COLUMN
            }
        );
    }

    #[test]
    fn test_missing_optional_default_leaves_role_unmapped() {
        let ds = dataset(&["description", "company"]);
        let (mapping, resolved) = resolve_mapping(&ds, &ColumnSelection::default()).unwrap();
        assert_eq!(mapping.rating, None);
        assert_eq!(mapping.position, None);
        assert_eq!(resolved.position, None);
    }

    #[test]
    fn test_blank_selection_counts_as_unset() {
        let ds = dataset(&["description", "company"]);
        let selection = ColumnSelection {
            description: Some("  ".to_string()),
            ..Default::default()
        };
        let (mapping, _) = resolve_mapping(&ds, &selection).unwrap();
        assert_eq!(mapping.description, 0);
    }

    #[test]
    fn test_suggest_selection_only_names_present_columns() {
        let columns = vec!["description".to_string(), "title".to_string()];
        let suggestion = suggest_selection(&columns);
        assert_eq!(suggestion.description.as_deref(), Some("description"));
        assert_eq!(suggestion.company, None);
        assert_eq!(suggestion.position, None);
    }
}
