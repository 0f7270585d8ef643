//! Table definitions for the OMOP CDM v5.4
//!
//! This module contains one constructor per CDM table, grouped by the
//! domains of the published specification. Table and column names match
//! the standard bit-for-bit; other OMOP tooling (ATLAS, ETL scripts,
//! vocabulary distributions) depends on them.

pub mod clinical;
pub mod derived;
pub mod economics;
pub mod health_system;
pub mod metadata;
pub mod vocabulary;

// Re-export table constructors for easier access
pub use clinical::{
    condition_occurrence, death, device_exposure, drug_exposure, episode, episode_event,
    fact_relationship, measurement, note, note_nlp, observation, observation_period, person,
    procedure_occurrence, specimen, visit_detail, visit_occurrence,
};
pub use derived::{cohort, cohort_definition, condition_era, dose_era, drug_era};
pub use economics::{cost, payer_plan_period};
pub use health_system::{care_site, location, provider};
pub use metadata::{cdm_source, metadata};
pub use vocabulary::{
    concept, concept_ancestor, concept_class, concept_relationship, concept_synonym, domain,
    drug_strength, relationship, source_to_concept_map, vocabulary,
};
