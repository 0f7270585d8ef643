//! Standardized vocabulary table definitions
//!
//! These tables carry the OMOP Standardized Vocabularies: concepts, their
//! classifications, relationships and hierarchies, plus drug strength
//! reference content and the legacy source-to-concept mapping table.

use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};

/// `concept` table definition
///
/// Central reference table; nearly every clinical table holds one or more
/// foreign keys into it.
#[must_use]
pub fn concept() -> TableDef {
    TableDef::new(
        "concept",
        "Standardized vocabulary entries uniquely identifying each unit of clinical meaning",
        vec![
            ColumnDef::new("concept_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("concept_name", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("domain_id", ColumnType::String, false)
                .with_max_length(20)
                .references("domain"),
            ColumnDef::new("vocabulary_id", ColumnType::String, false)
                .with_max_length(20)
                .references("vocabulary"),
            ColumnDef::new("concept_class_id", ColumnType::String, false)
                .with_max_length(20)
                .references("concept_class"),
            ColumnDef::new("standard_concept", ColumnType::String, true).with_max_length(1),
            ColumnDef::new("concept_code", ColumnType::String, false).with_max_length(50),
            ColumnDef::new("valid_start_date", ColumnType::Date, false),
            ColumnDef::new("valid_end_date", ColumnType::Date, false),
            ColumnDef::new("invalid_reason", ColumnType::String, true).with_max_length(1),
        ],
    )
}

/// `vocabulary` table definition
#[must_use]
pub fn vocabulary() -> TableDef {
    TableDef::new(
        "vocabulary",
        "Vocabularies collected from various sources or created by the OMOP community",
        vec![
            ColumnDef::new("vocabulary_id", ColumnType::String, false)
                .with_max_length(20)
                .primary_key(),
            ColumnDef::new("vocabulary_name", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("vocabulary_reference", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("vocabulary_version", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("vocabulary_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}

/// `domain` table definition
#[must_use]
pub fn domain() -> TableDef {
    TableDef::new(
        "domain",
        "OMOP-defined domains the vocabulary concepts can belong to",
        vec![
            ColumnDef::new("domain_id", ColumnType::String, false)
                .with_max_length(20)
                .primary_key(),
            ColumnDef::new("domain_name", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("domain_concept_id", ColumnType::Integer, false).references("concept"),
        ],
    )
}

/// `concept_class` table definition
#[must_use]
pub fn concept_class() -> TableDef {
    TableDef::new(
        "concept_class",
        "Classifications differentiating concepts within a vocabulary",
        vec![
            ColumnDef::new("concept_class_id", ColumnType::String, false)
                .with_max_length(20)
                .primary_key(),
            ColumnDef::new("concept_class_name", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("concept_class_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}

/// `concept_relationship` table definition
#[must_use]
pub fn concept_relationship() -> TableDef {
    TableDef::new(
        "concept_relationship",
        "Direct relationships between pairs of concepts and their type",
        vec![
            ColumnDef::new("concept_id_1", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("concept_id_2", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("relationship_id", ColumnType::String, false)
                .with_max_length(20)
                .references("relationship"),
            ColumnDef::new("valid_start_date", ColumnType::Date, false),
            ColumnDef::new("valid_end_date", ColumnType::Date, false),
            ColumnDef::new("invalid_reason", ColumnType::String, true).with_max_length(1),
        ],
    )
}

/// `relationship` table definition
#[must_use]
pub fn relationship() -> TableDef {
    TableDef::new(
        "relationship",
        "Reference list of relationship types usable between concepts",
        vec![
            ColumnDef::new("relationship_id", ColumnType::String, false)
                .with_max_length(20)
                .primary_key(),
            ColumnDef::new("relationship_name", ColumnType::String, false).with_max_length(255),
            ColumnDef::new("is_hierarchical", ColumnType::String, false).with_max_length(1),
            ColumnDef::new("defines_ancestry", ColumnType::String, false).with_max_length(1),
            ColumnDef::new("reverse_relationship_id", ColumnType::String, false)
                .with_max_length(20),
            ColumnDef::new("relationship_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}

/// `concept_synonym` table definition
#[must_use]
pub fn concept_synonym() -> TableDef {
    TableDef::new(
        "concept_synonym",
        "Alternate names and descriptions for concepts",
        vec![
            ColumnDef::new("concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("concept_synonym_name", ColumnType::String, false)
                .with_max_length(1000),
            ColumnDef::new("language_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}

/// `concept_ancestor` table definition
#[must_use]
pub fn concept_ancestor() -> TableDef {
    TableDef::new(
        "concept_ancestor",
        "Complete hierarchical relationships between concepts, at every level of lineage",
        vec![
            ColumnDef::new("ancestor_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("descendant_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("min_levels_of_separation", ColumnType::Integer, false),
            ColumnDef::new("max_levels_of_separation", ColumnType::Integer, false),
        ],
    )
}

/// `source_to_concept_map` table definition
#[must_use]
pub fn source_to_concept_map() -> TableDef {
    TableDef::new(
        "source_to_concept_map",
        "Legacy mapping from local source codes to standard concepts",
        vec![
            ColumnDef::new("source_code", ColumnType::String, false).with_max_length(50),
            ColumnDef::new("source_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("source_vocabulary_id", ColumnType::String, false).with_max_length(20),
            ColumnDef::new("source_code_description", ColumnType::String, true)
                .with_max_length(255),
            ColumnDef::new("target_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("target_vocabulary_id", ColumnType::String, false)
                .with_max_length(20)
                .references("vocabulary"),
            ColumnDef::new("valid_start_date", ColumnType::Date, false),
            ColumnDef::new("valid_end_date", ColumnType::Date, false),
            ColumnDef::new("invalid_reason", ColumnType::String, true).with_max_length(1),
        ],
    )
}

/// `drug_strength` table definition
#[must_use]
pub fn drug_strength() -> TableDef {
    TableDef::new(
        "drug_strength",
        "Amount or concentration of a specific ingredient within a drug product",
        vec![
            ColumnDef::new("drug_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("ingredient_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("amount_value", ColumnType::Decimal, true),
            ColumnDef::new("amount_unit_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("numerator_value", ColumnType::Decimal, true),
            ColumnDef::new("numerator_unit_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("denominator_value", ColumnType::Decimal, true),
            ColumnDef::new("denominator_unit_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("box_size", ColumnType::Integer, true),
            ColumnDef::new("valid_start_date", ColumnType::Date, false),
            ColumnDef::new("valid_end_date", ColumnType::Date, false),
            ColumnDef::new("invalid_reason", ColumnType::String, true).with_max_length(1),
        ],
    )
}
