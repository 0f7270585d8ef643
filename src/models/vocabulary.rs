//! Standardized vocabulary record models

use crate::models::traits::CdmRecord;
use crate::schema::field_def::TableDef;
use crate::tables;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A standardized vocabulary entry uniquely identifying one unit of
/// clinical meaning
///
/// Concepts are derived from vocabularies such as SNOMED-CT, RxNorm and
/// LOINC; the clinical tables reference them to normalize terminology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub concept_id: i32,
    pub concept_name: String,
    pub domain_id: String,
    pub vocabulary_id: String,
    pub concept_class_id: String,
    pub standard_concept: Option<String>,
    pub concept_code: String,
    pub valid_start_date: NaiveDate,
    pub valid_end_date: NaiveDate,
    pub invalid_reason: Option<String>,
}

impl CdmRecord for Concept {
    fn table_name() -> &'static str {
        "concept"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::concept()
    }
}

/// A vocabulary collected from an external source or created by the OMOP
/// community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub vocabulary_id: String,
    pub vocabulary_name: String,
    pub vocabulary_reference: Option<String>,
    pub vocabulary_version: Option<String>,
    pub vocabulary_concept_id: i32,
}

impl CdmRecord for Vocabulary {
    fn table_name() -> &'static str {
        "vocabulary"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::vocabulary()
    }
}

/// An OMOP-defined domain that concepts can belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub domain_id: String,
    pub domain_name: String,
    pub domain_concept_id: i32,
}

impl CdmRecord for Domain {
    fn table_name() -> &'static str {
        "domain"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::domain()
    }
}

/// A classification differentiating concepts within a vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptClass {
    pub concept_class_id: String,
    pub concept_class_name: String,
    pub concept_class_concept_id: i32,
}

impl CdmRecord for ConceptClass {
    fn table_name() -> &'static str {
        "concept_class"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::concept_class()
    }
}

/// A direct relationship between two concepts and its type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRelationship {
    pub concept_id_1: i32,
    pub concept_id_2: i32,
    pub relationship_id: String,
    pub valid_start_date: NaiveDate,
    pub valid_end_date: NaiveDate,
    pub invalid_reason: Option<String>,
}

impl CdmRecord for ConceptRelationship {
    fn table_name() -> &'static str {
        "concept_relationship"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::concept_relationship()
    }
}

/// A relationship type usable between any two concepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub relationship_id: String,
    pub relationship_name: String,
    pub is_hierarchical: String,
    pub defines_ancestry: String,
    pub reverse_relationship_id: String,
    pub relationship_concept_id: i32,
}

impl CdmRecord for Relationship {
    fn table_name() -> &'static str {
        "relationship"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::relationship()
    }
}

/// An alternate name or description for a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptSynonym {
    pub concept_id: i32,
    pub concept_synonym_name: String,
    pub language_concept_id: i32,
}

impl CdmRecord for ConceptSynonym {
    fn table_name() -> &'static str {
        "concept_synonym"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::concept_synonym()
    }
}

/// A hierarchical ancestor-descendant pair of concepts, at any level of
/// lineage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptAncestor {
    pub ancestor_concept_id: i32,
    pub descendant_concept_id: i32,
    pub min_levels_of_separation: i32,
    pub max_levels_of_separation: i32,
}

impl CdmRecord for ConceptAncestor {
    fn table_name() -> &'static str {
        "concept_ancestor"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::concept_ancestor()
    }
}

/// A legacy mapping from a local source code to a standard concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceToConceptMap {
    pub source_code: String,
    pub source_concept_id: i32,
    pub source_vocabulary_id: String,
    pub source_code_description: Option<String>,
    pub target_concept_id: i32,
    pub target_vocabulary_id: String,
    pub valid_start_date: NaiveDate,
    pub valid_end_date: NaiveDate,
    pub invalid_reason: Option<String>,
}

impl CdmRecord for SourceToConceptMap {
    fn table_name() -> &'static str {
        "source_to_concept_map"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::source_to_concept_map()
    }
}

/// Amount or concentration of a specific ingredient within a drug product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugStrength {
    pub drug_concept_id: i32,
    pub ingredient_concept_id: i32,
    pub amount_value: Option<f64>,
    pub amount_unit_concept_id: Option<i32>,
    pub numerator_value: Option<f64>,
    pub numerator_unit_concept_id: Option<i32>,
    pub denominator_value: Option<f64>,
    pub denominator_unit_concept_id: Option<i32>,
    pub box_size: Option<i32>,
    pub valid_start_date: NaiveDate,
    pub valid_end_date: NaiveDate,
    pub invalid_reason: Option<String>,
}

impl CdmRecord for DrugStrength {
    fn table_name() -> &'static str {
        "drug_strength"
    }

    fn table_def() -> TableDef {
        tables::vocabulary::drug_strength()
    }
}
