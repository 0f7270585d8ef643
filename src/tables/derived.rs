//! Derived-element table definitions
//!
//! Eras computed from the event tables plus the cohort tables that
//! downstream tools such as ATLAS write into.

use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};

/// `drug_era` table definition
#[must_use]
pub fn drug_era() -> TableDef {
    TableDef::new(
        "drug_era",
        "Spans of time when a person is assumed to be exposed to a particular active ingredient",
        vec![
            ColumnDef::new("drug_era_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("drug_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("drug_era_start_date", ColumnType::Date, false),
            ColumnDef::new("drug_era_end_date", ColumnType::Date, false),
            ColumnDef::new("drug_exposure_count", ColumnType::Integer, true),
            ColumnDef::new("gap_days", ColumnType::Integer, true),
        ],
    )
}

/// `dose_era` table definition
#[must_use]
pub fn dose_era() -> TableDef {
    TableDef::new(
        "dose_era",
        "Spans of time when a person is assumed to be exposed to a constant dose of an ingredient",
        vec![
            ColumnDef::new("dose_era_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("drug_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("unit_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("dose_value", ColumnType::Decimal, false),
            ColumnDef::new("dose_era_start_date", ColumnType::Date, false),
            ColumnDef::new("dose_era_end_date", ColumnType::Date, false),
        ],
    )
}

/// `condition_era` table definition
#[must_use]
pub fn condition_era() -> TableDef {
    TableDef::new(
        "condition_era",
        "Spans of time when a person is assumed to have a given condition",
        vec![
            ColumnDef::new("condition_era_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("condition_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("condition_era_start_date", ColumnType::Date, false),
            ColumnDef::new("condition_era_end_date", ColumnType::Date, false),
            ColumnDef::new("condition_occurrence_count", ColumnType::Integer, true),
        ],
    )
}

/// `cohort` table definition
#[must_use]
pub fn cohort() -> TableDef {
    TableDef::new(
        "cohort",
        "Subjects satisfying a set of criteria for a duration of time",
        vec![
            ColumnDef::new("cohort_definition_id", ColumnType::Integer, false),
            ColumnDef::new("subject_id", ColumnType::Integer, false),
            ColumnDef::new("cohort_start_date", ColumnType::Date, false),
            ColumnDef::new("cohort_end_date", ColumnType::Date, false),
        ],
    )
}

/// `cohort_definition` table definition
#[must_use]
pub fn cohort_definition() -> TableDef {
    TableDef::new(
        "cohort_definition",
        "Rules governing the inclusion of subjects into a cohort",
        vec![
            ColumnDef::new("cohort_definition_id", ColumnType::Integer, false),
            ColumnDef::new("cohort_definition_name", ColumnType::String, false)
                .with_max_length(255),
            ColumnDef::new("cohort_definition_description", ColumnType::Text, true),
            ColumnDef::new("definition_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("cohort_definition_syntax", ColumnType::Text, true),
            ColumnDef::new("subject_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("cohort_initiation_date", ColumnType::Date, true),
        ],
    )
}
