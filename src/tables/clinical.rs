//! Clinical event table definitions
//!
//! The person-centric event tables of the CDM: demographics, observation
//! periods, visits, conditions, drugs, procedures, devices, measurements,
//! observations, death, notes, specimens, and the fact/episode linkage
//! tables.

use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};

/// `person` table definition
#[must_use]
pub fn person() -> TableDef {
    TableDef::new(
        "person",
        "Central identity management for all persons in the database",
        vec![
            ColumnDef::new("person_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("gender_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("year_of_birth", ColumnType::Integer, false),
            ColumnDef::new("month_of_birth", ColumnType::Integer, true),
            ColumnDef::new("day_of_birth", ColumnType::Integer, true),
            ColumnDef::new("birth_datetime", ColumnType::DateTime, true),
            ColumnDef::new("race_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("ethnicity_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("location_id", ColumnType::Integer, true).references("location"),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("care_site_id", ColumnType::Integer, true).references("care_site"),
            ColumnDef::new("person_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("gender_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("gender_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("race_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("race_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("ethnicity_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("ethnicity_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `observation_period` table definition
#[must_use]
pub fn observation_period() -> TableDef {
    TableDef::new(
        "observation_period",
        "Spans of time during which clinical events are expected to be captured",
        vec![
            ColumnDef::new("observation_period_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("observation_period_start_date", ColumnType::Date, false),
            ColumnDef::new("observation_period_end_date", ColumnType::Date, false),
            ColumnDef::new("period_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}

/// `visit_occurrence` table definition
#[must_use]
pub fn visit_occurrence() -> TableDef {
    TableDef::new(
        "visit_occurrence",
        "Events where persons engage with the healthcare system for a duration of time",
        vec![
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("visit_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("visit_start_date", ColumnType::Date, false),
            ColumnDef::new("visit_start_datetime", ColumnType::DateTime, true),
            ColumnDef::new("visit_end_date", ColumnType::Date, false),
            ColumnDef::new("visit_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("visit_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("care_site_id", ColumnType::Integer, true).references("care_site"),
            ColumnDef::new("visit_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("visit_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("admitted_from_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("admitted_from_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("discharged_to_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("discharged_to_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("preceding_visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
        ],
    )
}

/// `visit_detail` table definition
#[must_use]
pub fn visit_detail() -> TableDef {
    TableDef::new(
        "visit_detail",
        "Detail records of visits, such as ward movements within a hospital stay",
        vec![
            ColumnDef::new("visit_detail_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("visit_detail_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("visit_detail_start_date", ColumnType::Date, false),
            ColumnDef::new("visit_detail_start_datetime", ColumnType::DateTime, true),
            ColumnDef::new("visit_detail_end_date", ColumnType::Date, false),
            ColumnDef::new("visit_detail_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("visit_detail_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("care_site_id", ColumnType::Integer, true).references("care_site"),
            ColumnDef::new("visit_detail_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("visit_detail_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("admitted_from_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("admitted_from_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("discharged_to_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("discharged_to_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("preceding_visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("parent_visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, false)
                .references("visit_occurrence"),
        ],
    )
}

/// `condition_occurrence` table definition
#[must_use]
pub fn condition_occurrence() -> TableDef {
    TableDef::new(
        "condition_occurrence",
        "Events suggesting the presence of a disease or medical condition",
        vec![
            ColumnDef::new("condition_occurrence_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("condition_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("condition_start_date", ColumnType::Date, false),
            ColumnDef::new("condition_start_datetime", ColumnType::DateTime, true),
            ColumnDef::new("condition_end_date", ColumnType::Date, true),
            ColumnDef::new("condition_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("condition_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("condition_status_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("stop_reason", ColumnType::String, true).with_max_length(20),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("condition_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("condition_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("condition_status_source_value", ColumnType::String, true)
                .with_max_length(50),
        ],
    )
}

/// `drug_exposure` table definition
#[must_use]
pub fn drug_exposure() -> TableDef {
    TableDef::new(
        "drug_exposure",
        "Exposure to a drug ingested or otherwise introduced into the body",
        vec![
            ColumnDef::new("drug_exposure_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("drug_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("drug_exposure_start_date", ColumnType::Date, false),
            ColumnDef::new("drug_exposure_start_datetime", ColumnType::DateTime, true),
            ColumnDef::new("drug_exposure_end_date", ColumnType::Date, false),
            ColumnDef::new("drug_exposure_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("verbatim_end_date", ColumnType::Date, true),
            ColumnDef::new("drug_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("stop_reason", ColumnType::String, true).with_max_length(20),
            ColumnDef::new("refills", ColumnType::Integer, true),
            ColumnDef::new("quantity", ColumnType::Decimal, true),
            ColumnDef::new("days_supply", ColumnType::Integer, true),
            ColumnDef::new("sig", ColumnType::Text, true),
            ColumnDef::new("route_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("lot_number", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("drug_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("drug_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("route_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("dose_unit_source_value", ColumnType::String, true)
                .with_max_length(50),
        ],
    )
}

/// `procedure_occurrence` table definition
#[must_use]
pub fn procedure_occurrence() -> TableDef {
    TableDef::new(
        "procedure_occurrence",
        "Activities or processes carried out on the patient with a diagnostic or therapeutic purpose",
        vec![
            ColumnDef::new("procedure_occurrence_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("procedure_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("procedure_date", ColumnType::Date, false),
            ColumnDef::new("procedure_datetime", ColumnType::DateTime, true),
            ColumnDef::new("procedure_end_date", ColumnType::Date, true),
            ColumnDef::new("procedure_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("procedure_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("modifier_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("quantity", ColumnType::Integer, true),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("procedure_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("procedure_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("modifier_source_value", ColumnType::String, true)
                .with_max_length(50),
        ],
    )
}

/// `device_exposure` table definition
#[must_use]
pub fn device_exposure() -> TableDef {
    TableDef::new(
        "device_exposure",
        "Exposure to a foreign physical object or instrument used for diagnostic or therapeutic purposes",
        vec![
            ColumnDef::new("device_exposure_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("device_concept_id", ColumnType::Integer, false).references("concept"),
            ColumnDef::new("device_exposure_start_date", ColumnType::Date, false),
            ColumnDef::new("device_exposure_start_datetime", ColumnType::DateTime, true),
            ColumnDef::new("device_exposure_end_date", ColumnType::Date, true),
            ColumnDef::new("device_exposure_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("device_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("unique_device_id", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("production_id", ColumnType::String, true).with_max_length(255),
            ColumnDef::new("quantity", ColumnType::Integer, true),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("device_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("device_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("unit_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("unit_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("unit_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `measurement` table definition
#[must_use]
pub fn measurement() -> TableDef {
    TableDef::new(
        "measurement",
        "Structured values obtained through standardized examination or testing of a person",
        vec![
            ColumnDef::new("measurement_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("measurement_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("measurement_date", ColumnType::Date, false),
            ColumnDef::new("measurement_datetime", ColumnType::DateTime, true),
            ColumnDef::new("measurement_time", ColumnType::String, true).with_max_length(10),
            ColumnDef::new("measurement_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("operator_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("value_as_number", ColumnType::Decimal, true),
            ColumnDef::new("value_as_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("unit_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("range_low", ColumnType::Decimal, true),
            ColumnDef::new("range_high", ColumnType::Decimal, true),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("measurement_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("measurement_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("unit_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("unit_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("value_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("measurement_event_id", ColumnType::Integer, true),
            ColumnDef::new("meas_event_field_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `observation` table definition
#[must_use]
pub fn observation() -> TableDef {
    TableDef::new(
        "observation",
        "Clinical facts obtained through examination, questioning or procedures",
        vec![
            ColumnDef::new("observation_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("observation_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("observation_date", ColumnType::Date, false),
            ColumnDef::new("observation_datetime", ColumnType::DateTime, true),
            ColumnDef::new("observation_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("value_as_number", ColumnType::Decimal, true),
            ColumnDef::new("value_as_string", ColumnType::String, true).with_max_length(60),
            ColumnDef::new("value_as_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("qualifier_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("unit_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("observation_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("observation_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("unit_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("qualifier_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("value_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("observation_event_id", ColumnType::Integer, true),
            ColumnDef::new("obs_event_field_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `death` table definition
#[must_use]
pub fn death() -> TableDef {
    TableDef::new(
        "death",
        "The clinical event of how and when a person dies",
        vec![
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("death_date", ColumnType::Date, false),
            ColumnDef::new("death_datetime", ColumnType::DateTime, true),
            ColumnDef::new("death_type_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("cause_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("cause_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("cause_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `note` table definition
#[must_use]
pub fn note() -> TableDef {
    TableDef::new(
        "note",
        "Unstructured free-text notes recorded by providers about patients",
        vec![
            ColumnDef::new("note_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("note_date", ColumnType::Date, false),
            ColumnDef::new("note_datetime", ColumnType::DateTime, true),
            ColumnDef::new("note_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("note_class_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("note_title", ColumnType::String, true).with_max_length(250),
            ColumnDef::new("note_text", ColumnType::Text, false),
            ColumnDef::new("encoding_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("language_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("provider_id", ColumnType::Integer, true).references("provider"),
            ColumnDef::new("visit_occurrence_id", ColumnType::Integer, true)
                .references("visit_occurrence"),
            ColumnDef::new("visit_detail_id", ColumnType::Integer, true)
                .references("visit_detail"),
            ColumnDef::new("note_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("note_event_id", ColumnType::Integer, true),
            ColumnDef::new("note_event_field_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `note_nlp` table definition
#[must_use]
pub fn note_nlp() -> TableDef {
    TableDef::new(
        "note_nlp",
        "Terms extracted from clinical notes by natural language processing",
        vec![
            ColumnDef::new("note_nlp_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("note_id", ColumnType::Integer, false),
            ColumnDef::new("section_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("snippet", ColumnType::String, true).with_max_length(250),
            ColumnDef::new("offset", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("lexical_variant", ColumnType::String, false).with_max_length(250),
            ColumnDef::new("note_nlp_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("note_nlp_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("nlp_system", ColumnType::String, true).with_max_length(250),
            ColumnDef::new("nlp_date", ColumnType::Date, false),
            ColumnDef::new("nlp_datetime", ColumnType::DateTime, true),
            ColumnDef::new("term_exists", ColumnType::String, true).with_max_length(1),
            ColumnDef::new("term_temporal", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("term_modifiers", ColumnType::String, true).with_max_length(2000),
        ],
    )
}

/// `specimen` table definition
#[must_use]
pub fn specimen() -> TableDef {
    TableDef::new(
        "specimen",
        "Biological samples taken from a person",
        vec![
            ColumnDef::new("specimen_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("specimen_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("specimen_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("specimen_date", ColumnType::Date, false),
            ColumnDef::new("specimen_datetime", ColumnType::DateTime, true),
            ColumnDef::new("quantity", ColumnType::Decimal, true),
            ColumnDef::new("unit_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("anatomic_site_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("disease_status_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("specimen_source_id", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("specimen_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("unit_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("anatomic_site_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("disease_status_source_value", ColumnType::String, true)
                .with_max_length(50),
        ],
    )
}

/// `fact_relationship` table definition
#[must_use]
pub fn fact_relationship() -> TableDef {
    TableDef::new(
        "fact_relationship",
        "Relationships between facts stored in any CDM table",
        vec![
            ColumnDef::new("domain_concept_id_1", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("fact_id_1", ColumnType::Integer, false),
            ColumnDef::new("domain_concept_id_2", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("fact_id_2", ColumnType::Integer, false),
            ColumnDef::new("relationship_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}

/// `episode` table definition
#[must_use]
pub fn episode() -> TableDef {
    TableDef::new(
        "episode",
        "Aggregation of lower-level clinical events into disease phases, outcomes and treatments",
        vec![
            ColumnDef::new("episode_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("episode_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("episode_start_date", ColumnType::Date, false),
            ColumnDef::new("episode_start_datetime", ColumnType::DateTime, true),
            ColumnDef::new("episode_end_date", ColumnType::Date, true),
            ColumnDef::new("episode_end_datetime", ColumnType::DateTime, true),
            ColumnDef::new("episode_parent_id", ColumnType::Integer, true),
            ColumnDef::new("episode_number", ColumnType::Integer, true),
            ColumnDef::new("episode_object_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("episode_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("episode_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("episode_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `episode_event` table definition
#[must_use]
pub fn episode_event() -> TableDef {
    TableDef::new(
        "episode_event",
        "Links qualifying clinical events to their episode entries",
        vec![
            ColumnDef::new("episode_id", ColumnType::Integer, false).references("episode"),
            ColumnDef::new("event_id", ColumnType::Integer, false),
            ColumnDef::new("episode_event_field_concept_id", ColumnType::Integer, false)
                .references("concept"),
        ],
    )
}
