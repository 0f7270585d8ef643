//! Health system record models

use crate::models::traits::CdmRecord;
use crate::schema::field_def::TableDef;
use crate::tables;
use serde::{Deserialize, Serialize};

/// A physical location or address of a person or care site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i32,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub county: Option<String>,
    pub location_source_value: Option<String>,
    pub country_concept_id: Option<i32>,
    pub country_source_value: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CdmRecord for Location {
    fn table_name() -> &'static str {
        "location"
    }

    fn table_def() -> TableDef {
        tables::health_system::location()
    }
}

/// An institutional unit where healthcare delivery is practiced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareSite {
    pub care_site_id: i32,
    pub care_site_name: Option<String>,
    pub place_of_service_concept_id: Option<i32>,
    pub location_id: Option<i32>,
    pub care_site_source_value: Option<String>,
    pub place_of_service_source_value: Option<String>,
}

impl CdmRecord for CareSite {
    fn table_name() -> &'static str {
        "care_site"
    }

    fn table_def() -> TableDef {
        tables::health_system::care_site()
    }
}

/// A uniquely identified healthcare provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: i32,
    pub provider_name: Option<String>,
    pub npi: Option<String>,
    pub dea: Option<String>,
    pub specialty_concept_id: Option<i32>,
    pub care_site_id: Option<i32>,
    pub year_of_birth: Option<i32>,
    pub gender_concept_id: Option<i32>,
    pub provider_source_value: Option<String>,
    pub specialty_source_value: Option<String>,
    pub specialty_source_concept_id: Option<i32>,
    pub gender_source_value: Option<String>,
    pub gender_source_concept_id: Option<i32>,
}

impl CdmRecord for Provider {
    fn table_name() -> &'static str {
        "provider"
    }

    fn table_def() -> TableDef {
        tables::health_system::provider()
    }
}
