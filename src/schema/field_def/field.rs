//! Column definitions for the OMOP CDM table declarations
//!
//! This module defines the core column definition structures used by every
//! table declaration in the crate.

use arrow::datatypes::{DataType, Field, TimeUnit};
use serde::Serialize;
use std::fmt;

/// The logical type of a CDM column
///
/// This enum standardizes the column types used across the CDM tables and
/// maps each of them onto an Arrow representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    /// Integer value (identifiers, counts, years)
    Integer,
    /// Bounded text value (varchar columns)
    String,
    /// Unbounded text value (clob/text columns)
    Text,
    /// Decimal value (costs, quantities, coordinates)
    Decimal,
    /// Calendar date
    Date,
    /// Date with time of day
    DateTime,
}

impl ColumnType {
    /// Convert to the Arrow `DataType` used for storage
    #[must_use]
    pub fn to_arrow_type(self) -> DataType {
        match self {
            ColumnType::Integer => DataType::Int32,
            ColumnType::String | ColumnType::Text => DataType::Utf8,
            ColumnType::Decimal => DataType::Float64,
            ColumnType::Date => DataType::Date32,
            ColumnType::DateTime => DataType::Timestamp(TimeUnit::Microsecond, None),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "Integer"),
            ColumnType::String => write!(f, "String"),
            ColumnType::Text => write!(f, "Text"),
            ColumnType::Decimal => write!(f, "Decimal"),
            ColumnType::Date => write!(f, "Date"),
            ColumnType::DateTime => write!(f, "DateTime"),
        }
    }
}

/// A single column declaration in a CDM table
///
/// Column names match the published OMOP CDM specification exactly; other
/// OMOP tooling depends on them bit-for-bit.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDef {
    /// Name of the column in the CDM table
    pub name: String,
    /// Logical type of the column
    pub column_type: ColumnType,
    /// Whether the column can be null
    pub nullable: bool,
    /// Maximum length for bounded string columns
    pub max_length: Option<usize>,
    /// Whether this column is the table's primary key
    pub primary_key: bool,
    /// Name of the table this column references, if it is a foreign key
    pub references: Option<String>,
}

impl ColumnDef {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, column_type: ColumnType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable,
            max_length: None,
            primary_key: false,
            references: None,
        }
    }

    /// Mark this column as the table's primary key
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Declare this column as a foreign key to another table
    #[must_use]
    pub fn references(mut self, table: impl Into<String>) -> Self {
        self.references = Some(table.into());
        self
    }

    /// Record the maximum length of a bounded string column
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Convert to an Arrow `Field`
    #[must_use]
    pub fn to_arrow_field(&self) -> Field {
        Field::new(&self.name, self.column_type.to_arrow_type(), self.nullable)
    }

    /// Whether this column is a foreign key
    #[must_use]
    pub fn is_foreign_key(&self) -> bool {
        self.references.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_type_mapping() {
        assert_eq!(ColumnType::Integer.to_arrow_type(), DataType::Int32);
        assert_eq!(ColumnType::String.to_arrow_type(), DataType::Utf8);
        assert_eq!(ColumnType::Text.to_arrow_type(), DataType::Utf8);
        assert_eq!(ColumnType::Decimal.to_arrow_type(), DataType::Float64);
        assert_eq!(ColumnType::Date.to_arrow_type(), DataType::Date32);
        assert_eq!(
            ColumnType::DateTime.to_arrow_type(),
            DataType::Timestamp(TimeUnit::Microsecond, None)
        );
    }

    #[test]
    fn builder_flags() {
        let col = ColumnDef::new("gender_concept_id", ColumnType::Integer, false)
            .references("concept");
        assert!(col.is_foreign_key());
        assert!(!col.primary_key);
        assert_eq!(col.references.as_deref(), Some("concept"));

        let pk = ColumnDef::new("person_id", ColumnType::Integer, false).primary_key();
        assert!(pk.primary_key);
        assert!(!pk.is_foreign_key());
    }

    #[test]
    fn arrow_field_carries_nullability() {
        let col = ColumnDef::new("care_site_name", ColumnType::String, true).with_max_length(255);
        let field = col.to_arrow_field();
        assert_eq!(field.name(), "care_site_name");
        assert!(field.is_nullable());
    }
}
