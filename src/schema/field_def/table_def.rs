//! Table definitions for the OMOP CDM
//!
//! A `TableDef` is the single source of truth for one CDM table: its name,
//! its column declarations, and the Arrow schema derived from them.

use super::field::ColumnDef;
use arrow::datatypes::Schema;
use serde::Serialize;
use std::sync::Arc;

/// A declared CDM table
#[derive(Debug, Clone, Serialize)]
pub struct TableDef {
    /// The CDM table name (e.g. `person`, `drug_exposure`)
    pub name: String,
    /// Short description of the table
    pub description: String,
    /// Column declarations in CDM order
    pub columns: Vec<ColumnDef>,
    /// Cached Arrow schema
    #[serde(skip)]
    arrow_schema: Arc<Schema>,
}

impl TableDef {
    /// Create a new table definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        columns: Vec<ColumnDef>,
    ) -> Self {
        let fields: Vec<arrow::datatypes::Field> =
            columns.iter().map(ColumnDef::to_arrow_field).collect();
        let arrow_schema = Arc::new(Schema::new(fields));

        Self {
            name: name.into(),
            description: description.into(),
            columns,
            arrow_schema,
        }
    }

    /// Get the Arrow schema for this table
    #[must_use]
    pub fn arrow_schema(&self) -> Arc<Schema> {
        self.arrow_schema.clone()
    }

    /// Get a column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Check if this table declares a column with the given name
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|col| col.name == name)
    }

    /// The primary-key column, if the table declares one
    #[must_use]
    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|col| col.primary_key)
    }

    /// Iterate over the foreign-key columns of this table
    pub fn foreign_keys(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|col| col.is_foreign_key())
    }

    /// Column names in CDM order
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field_def::field::ColumnType;

    fn sample_table() -> TableDef {
        TableDef::new(
            "domain",
            "OMOP-defined domains for standardized vocabulary concepts",
            vec![
                ColumnDef::new("domain_id", ColumnType::String, false)
                    .with_max_length(20)
                    .primary_key(),
                ColumnDef::new("domain_name", ColumnType::String, false).with_max_length(255),
                ColumnDef::new("domain_concept_id", ColumnType::Integer, false)
                    .references("concept"),
            ],
        )
    }

    #[test]
    fn accessors() {
        let table = sample_table();
        assert_eq!(table.name, "domain");
        assert_eq!(table.primary_key().unwrap().name, "domain_id");
        assert!(table.has_column("domain_name"));
        assert!(!table.has_column("domain"));

        let fks: Vec<_> = table.foreign_keys().collect();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].references.as_deref(), Some("concept"));
    }

    #[test]
    fn arrow_schema_matches_columns() {
        let table = sample_table();
        let schema = table.arrow_schema();
        assert_eq!(schema.fields().len(), 3);
        assert_eq!(schema.field(0).name(), "domain_id");
        assert_eq!(schema.field(2).name(), "domain_concept_id");
    }
}
