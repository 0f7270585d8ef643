//! Derived-element record models

use crate::models::traits::CdmRecord;
use crate::schema::field_def::TableDef;
use crate::tables;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A span of time when a person is assumed to be exposed to a particular
/// active ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugEra {
    pub drug_era_id: i32,
    pub person_id: i32,
    pub drug_concept_id: i32,
    pub drug_era_start_date: NaiveDate,
    pub drug_era_end_date: NaiveDate,
    pub drug_exposure_count: Option<i32>,
    pub gap_days: Option<i32>,
}

impl CdmRecord for DrugEra {
    fn table_name() -> &'static str {
        "drug_era"
    }

    fn table_def() -> TableDef {
        tables::derived::drug_era()
    }
}

/// A span of time when a person is assumed to be exposed to a constant
/// dose of a specific active ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseEra {
    pub dose_era_id: i32,
    pub person_id: i32,
    pub drug_concept_id: i32,
    pub unit_concept_id: i32,
    pub dose_value: f64,
    pub dose_era_start_date: NaiveDate,
    pub dose_era_end_date: NaiveDate,
}

impl CdmRecord for DoseEra {
    fn table_name() -> &'static str {
        "dose_era"
    }

    fn table_def() -> TableDef {
        tables::derived::dose_era()
    }
}

/// A span of time when a person is assumed to have a given condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEra {
    pub condition_era_id: i32,
    pub person_id: i32,
    pub condition_concept_id: i32,
    pub condition_era_start_date: NaiveDate,
    pub condition_era_end_date: NaiveDate,
    pub condition_occurrence_count: Option<i32>,
}

impl CdmRecord for ConditionEra {
    fn table_name() -> &'static str {
        "condition_era"
    }

    fn table_def() -> TableDef {
        tables::derived::condition_era()
    }
}

/// A subject satisfying a cohort definition for a duration of time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub cohort_definition_id: i32,
    pub subject_id: i32,
    pub cohort_start_date: NaiveDate,
    pub cohort_end_date: NaiveDate,
}

impl CdmRecord for Cohort {
    fn table_name() -> &'static str {
        "cohort"
    }

    fn table_def() -> TableDef {
        tables::derived::cohort()
    }
}

/// The rules governing the inclusion of subjects into a cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortDefinition {
    pub cohort_definition_id: i32,
    pub cohort_definition_name: String,
    pub cohort_definition_description: Option<String>,
    pub definition_type_concept_id: i32,
    pub cohort_definition_syntax: Option<String>,
    pub subject_concept_id: i32,
    pub cohort_initiation_date: Option<NaiveDate>,
}

impl CdmRecord for CohortDefinition {
    fn table_name() -> &'static str {
        "cohort_definition"
    }

    fn table_def() -> TableDef {
        tables::derived::cohort_definition()
    }
}
