//! Metadata record models

use crate::models::traits::CdmRecord;
use crate::schema::field_def::TableDef;
use crate::tables;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Detail about the source database and the ETL that produced the CDM
/// instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdmSource {
    pub cdm_source_name: String,
    pub cdm_source_abbreviation: String,
    pub cdm_holder: String,
    pub source_description: Option<String>,
    pub source_documentation_reference: Option<String>,
    pub cdm_etl_reference: Option<String>,
    pub source_release_date: NaiveDate,
    pub cdm_release_date: NaiveDate,
    pub cdm_version: Option<String>,
    pub cdm_version_concept_id: i32,
    pub vocabulary_version: String,
}

impl CdmRecord for CdmSource {
    fn table_name() -> &'static str {
        "cdm_source"
    }

    fn table_def() -> TableDef {
        tables::metadata::cdm_source()
    }
}

/// A metadata entry about the dataset itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub metadata_id: i32,
    pub metadata_concept_id: i32,
    pub metadata_type_concept_id: i32,
    pub name: String,
    pub value_as_string: Option<String>,
    pub value_as_concept_id: Option<i32>,
    pub value_as_number: Option<f64>,
    pub metadata_date: Option<NaiveDate>,
    pub metadata_datetime: Option<NaiveDateTime>,
}

impl CdmRecord for Metadata {
    fn table_name() -> &'static str {
        "metadata"
    }

    fn table_def() -> TableDef {
        tables::metadata::metadata()
    }
}
