//! Health system table definitions
//!
//! Locations, care sites and providers.

use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};

/// `location` table definition
#[must_use]
pub fn location() -> TableDef {
    TableDef::new(
        "location",
        "Physical location or address information of persons and care sites",
        vec![
            ColumnDef::new("location_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("address_1", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("address_2", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("city", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("state", ColumnType::String, true).with_max_length(2),
            ColumnDef::new("zip", ColumnType::String, true).with_max_length(9),
            ColumnDef::new("county", ColumnType::String, true).with_max_length(20),
            ColumnDef::new("location_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("country_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("country_source_value", ColumnType::String, true).with_max_length(80),
            ColumnDef::new("latitude", ColumnType::Decimal, true),
            ColumnDef::new("longitude", ColumnType::Decimal, true),
        ],
    )
}

/// `care_site` table definition
#[must_use]
pub fn care_site() -> TableDef {
    TableDef::new(
        "care_site",
        "Institutional units where healthcare delivery is practiced",
        vec![
            ColumnDef::new("care_site_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("care_site_name", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("place_of_service_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("location_id", ColumnType::Integer, true).references("location"),
            ColumnDef::new("care_site_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("place_of_service_source_value", ColumnType::String, true)
                .with_max_length(50),
        ],
    )
}

/// `provider` table definition
#[must_use]
pub fn provider() -> TableDef {
    TableDef::new(
        "provider",
        "Uniquely identified healthcare providers delivering hands-on care",
        vec![
            ColumnDef::new("provider_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("provider_name", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("npi", ColumnType::String, true).with_max_length(20),
            ColumnDef::new("dea", ColumnType::String, true).with_max_length(20),
            ColumnDef::new("specialty_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("care_site_id", ColumnType::Integer, true).references("care_site"),
            ColumnDef::new("year_of_birth", ColumnType::Integer, true),
            ColumnDef::new("gender_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("provider_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("specialty_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("specialty_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("gender_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("gender_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}
