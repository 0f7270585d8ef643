//! Metadata table definitions
//!
//! Information about the source database and the dataset itself.

use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};

/// `cdm_source` table definition
#[must_use]
pub fn cdm_source() -> TableDef {
    TableDef::new(
        "cdm_source",
        "Detail about the source database and its transformation into the CDM",
        vec![
            ColumnDef::new("cdm_source_name", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("cdm_source_abbreviation", ColumnType::String, false)
                .with_max_length(25),
            ColumnDef::new("cdm_holder", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("source_description", ColumnType::Text, true),
            ColumnDef::new("source_documentation_reference", ColumnType::String, true)
                .with_max_length(255),
            ColumnDef::new("cdm_etl_reference", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("source_release_date", ColumnType::Date, false),
            ColumnDef::new("cdm_release_date", ColumnType::Date, false),
            ColumnDef::new("cdm_version", ColumnType::String, true).with_max_length(10),
            ColumnDef::new("cdm_version_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("vocabulary_version", ColumnType::String, false).with_max_length(20),
        ],
    )
}

/// `metadata` table definition
#[must_use]
pub fn metadata() -> TableDef {
    TableDef::new(
        "metadata",
        "Metadata about a dataset transformed to the CDM",
        vec![
            ColumnDef::new("metadata_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("metadata_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("metadata_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("name", ColumnType::String, false).with_max_length(250),
            ColumnDef::new("value_as_string", ColumnType::String, true).with_max_length(250),
            ColumnDef::new("value_as_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("value_as_number", ColumnType::Decimal, true),
            ColumnDef::new("metadata_date", ColumnType::Date, true),
            ColumnDef::new("metadata_datetime", ColumnType::DateTime, true),
        ],
    )
}
