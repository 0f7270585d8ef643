//! The CDM table catalog
//!
//! A `Catalog` holds the full set of declared tables, supports by-name
//! lookup, validates the structural invariants of the declarations
//! (referential closure, primary-key discipline, column-name uniqueness)
//! and exports the declarations as JSON for external tooling.

use crate::error::{CdmError, Result};
use crate::schema::field_def::TableDef;
use crate::tables;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// A structural problem found while validating the catalog
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    /// Table where the problem was found
    pub table: String,
    /// Description of the problem
    pub description: String,
}

/// Result of validating a catalog
#[derive(Debug, Clone)]
pub struct CatalogReport {
    /// Whether all declarations are structurally sound
    pub valid: bool,
    /// Issues found
    pub issues: Vec<CatalogIssue>,
}

/// The set of declared CDM tables
pub struct Catalog {
    tables: Vec<TableDef>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a list of table definitions
    #[must_use]
    pub fn new(tables: Vec<TableDef>) -> Self {
        let index = tables
            .iter()
            .enumerate()
            .map(|(i, table)| (table.name.clone(), i))
            .collect();
        Self { tables, index }
    }

    /// The full OMOP CDM v5.4 catalog
    #[must_use]
    pub fn cdm() -> Self {
        Self::new(vec![
            // Vocabulary
            tables::concept(),
            tables::vocabulary(),
            tables::domain(),
            tables::concept_class(),
            tables::concept_relationship(),
            tables::relationship(),
            tables::concept_synonym(),
            tables::concept_ancestor(),
            tables::source_to_concept_map(),
            tables::drug_strength(),
            // Clinical events
            tables::person(),
            tables::observation_period(),
            tables::visit_occurrence(),
            tables::visit_detail(),
            tables::condition_occurrence(),
            tables::drug_exposure(),
            tables::procedure_occurrence(),
            tables::device_exposure(),
            tables::measurement(),
            tables::observation(),
            tables::death(),
            tables::note(),
            tables::note_nlp(),
            tables::specimen(),
            tables::fact_relationship(),
            tables::episode(),
            tables::episode_event(),
            // Health system
            tables::location(),
            tables::care_site(),
            tables::provider(),
            // Health economics
            tables::payer_plan_period(),
            tables::cost(),
            // Derived elements
            tables::drug_era(),
            tables::dose_era(),
            tables::condition_era(),
            tables::cohort(),
            tables::cohort_definition(),
            // Metadata
            tables::cdm_source(),
            tables::metadata(),
        ])
    }

    /// Get a table definition by CDM table name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableDef> {
        self.index.get(name).map(|&i| &self.tables[i])
    }

    /// Iterate over the declared tables
    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.iter()
    }

    /// Number of declared tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Declared table names, in declaration order
    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|table| table.name.as_str()).collect()
    }

    /// Validate the structural invariants of the declarations
    ///
    /// Checks that every foreign key references a table in the catalog,
    /// that referencing columns have the type of the referenced primary
    /// key, that no table declares more than one primary key, and that
    /// column names are unique per table.
    #[must_use]
    pub fn validate(&self) -> CatalogReport {
        let mut issues = Vec::new();

        for table in &self.tables {
            let pk_count = table.columns.iter().filter(|col| col.primary_key).count();
            if pk_count > 1 {
                issues.push(CatalogIssue {
                    table: table.name.clone(),
                    description: format!("{pk_count} primary-key columns declared"),
                });
            }

            for duplicate in table
                .columns
                .iter()
                .map(|col| col.name.as_str())
                .duplicates()
            {
                issues.push(CatalogIssue {
                    table: table.name.clone(),
                    description: format!("duplicate column '{duplicate}'"),
                });
            }

            for fk in table.foreign_keys() {
                let target_name = fk.references.as_deref().unwrap_or_default();
                match self.get(target_name) {
                    None => issues.push(CatalogIssue {
                        table: table.name.clone(),
                        description: format!(
                            "column '{}' references unknown table '{target_name}'",
                            fk.name
                        ),
                    }),
                    Some(target) => match target.primary_key() {
                        None => issues.push(CatalogIssue {
                            table: table.name.clone(),
                            description: format!(
                                "column '{}' references table '{target_name}', which has no primary key",
                                fk.name
                            ),
                        }),
                        Some(pk) if pk.column_type != fk.column_type => {
                            issues.push(CatalogIssue {
                                table: table.name.clone(),
                                description: format!(
                                    "column '{}' is {} but '{target_name}.{}' is {}",
                                    fk.name, fk.column_type, pk.name, pk.column_type
                                ),
                            });
                        }
                        Some(_) => {}
                    },
                }
            }
        }

        if issues.is_empty() {
            log::debug!("catalog validation passed for {} tables", self.tables.len());
        } else {
            log::warn!("catalog validation found {} issue(s)", issues.len());
        }

        CatalogReport {
            valid: issues.is_empty(),
            issues,
        }
    }

    /// Validate and convert any issue into an error
    pub fn ensure_valid(&self) -> Result<()> {
        let report = self.validate();
        if report.valid {
            Ok(())
        } else {
            let summary = report
                .issues
                .iter()
                .map(|issue| format!("{}: {}", issue.table, issue.description))
                .join("; ");
            Err(CdmError::Catalog(summary))
        }
    }

    /// Export the declarations as a JSON document
    ///
    /// The output lists every table with its columns, types, nullability,
    /// primary keys and foreign-key targets, for consumption by external
    /// schema tooling.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.tables)
            .map_err(|e| CdmError::Catalog(format!("JSON export failed: {e}")))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::cdm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field_def::{ColumnDef, ColumnType};

    #[test]
    fn unknown_reference_is_reported() {
        let catalog = Catalog::new(vec![TableDef::new(
            "death",
            "",
            vec![ColumnDef::new("person_id", ColumnType::Integer, false).references("person")],
        )]);
        let report = catalog.validate();
        assert!(!report.valid);
        assert!(report.issues[0].description.contains("unknown table 'person'"));
        assert!(catalog.ensure_valid().is_err());
    }

    #[test]
    fn fk_type_mismatch_is_reported() {
        let catalog = Catalog::new(vec![
            TableDef::new(
                "domain",
                "",
                vec![
                    ColumnDef::new("domain_id", ColumnType::String, false)
                        .with_max_length(20)
                        .primary_key(),
                ],
            ),
            TableDef::new(
                "concept",
                "",
                vec![
                    ColumnDef::new("concept_id", ColumnType::Integer, false).primary_key(),
                    // Wrong on purpose: the domain PK is a string
                    ColumnDef::new("domain_id", ColumnType::Integer, false).references("domain"),
                ],
            ),
        ]);
        let report = catalog.validate();
        assert!(!report.valid);
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn duplicate_column_is_reported() {
        let catalog = Catalog::new(vec![TableDef::new(
            "cohort",
            "",
            vec![
                ColumnDef::new("subject_id", ColumnType::Integer, false),
                ColumnDef::new("subject_id", ColumnType::Integer, false),
            ],
        )]);
        assert!(!catalog.validate().valid);
    }
}
