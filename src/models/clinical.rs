//! Clinical event record models

use crate::models::traits::CdmRecord;
use crate::schema::field_def::TableDef;
use crate::tables;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A uniquely identified person or patient with demographic information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: i32,
    pub gender_concept_id: i32,
    pub year_of_birth: i32,
    pub month_of_birth: Option<i32>,
    pub day_of_birth: Option<i32>,
    pub birth_datetime: Option<NaiveDateTime>,
    pub race_concept_id: i32,
    pub ethnicity_concept_id: i32,
    pub location_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub care_site_id: Option<i32>,
    pub person_source_value: Option<String>,
    pub gender_source_value: Option<String>,
    pub gender_source_concept_id: Option<i32>,
    pub race_source_value: Option<String>,
    pub race_source_concept_id: Option<i32>,
    pub ethnicity_source_value: Option<String>,
    pub ethnicity_source_concept_id: Option<i32>,
}

impl CdmRecord for Person {
    fn table_name() -> &'static str {
        "person"
    }

    fn table_def() -> TableDef {
        tables::clinical::person()
    }
}

/// A span of time during which clinical events are expected to be
/// captured for a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPeriod {
    pub observation_period_id: i32,
    pub person_id: i32,
    pub observation_period_start_date: NaiveDate,
    pub observation_period_end_date: NaiveDate,
    pub period_type_concept_id: i32,
}

impl CdmRecord for ObservationPeriod {
    fn table_name() -> &'static str {
        "observation_period"
    }

    fn table_def() -> TableDef {
        tables::clinical::observation_period()
    }
}

/// An encounter with the healthcare system for a duration of time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitOccurrence {
    pub visit_occurrence_id: i32,
    pub person_id: i32,
    pub visit_concept_id: i32,
    pub visit_start_date: NaiveDate,
    pub visit_start_datetime: Option<NaiveDateTime>,
    pub visit_end_date: NaiveDate,
    pub visit_end_datetime: Option<NaiveDateTime>,
    pub visit_type_concept_id: i32,
    pub provider_id: Option<i32>,
    pub care_site_id: Option<i32>,
    pub visit_source_value: Option<String>,
    pub visit_source_concept_id: Option<i32>,
    pub admitted_from_concept_id: Option<i32>,
    pub admitted_from_source_value: Option<String>,
    pub discharged_to_concept_id: Option<i32>,
    pub discharged_to_source_value: Option<String>,
    pub preceding_visit_occurrence_id: Option<i32>,
}

impl CdmRecord for VisitOccurrence {
    fn table_name() -> &'static str {
        "visit_occurrence"
    }

    fn table_def() -> TableDef {
        tables::clinical::visit_occurrence()
    }
}

/// A detail record of a visit, such as a ward movement within a stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitDetail {
    pub visit_detail_id: i32,
    pub person_id: i32,
    pub visit_detail_concept_id: i32,
    pub visit_detail_start_date: NaiveDate,
    pub visit_detail_start_datetime: Option<NaiveDateTime>,
    pub visit_detail_end_date: NaiveDate,
    pub visit_detail_end_datetime: Option<NaiveDateTime>,
    pub visit_detail_type_concept_id: i32,
    pub provider_id: Option<i32>,
    pub care_site_id: Option<i32>,
    pub visit_detail_source_value: Option<String>,
    pub visit_detail_source_concept_id: Option<i32>,
    pub admitted_from_concept_id: Option<i32>,
    pub admitted_from_source_value: Option<String>,
    pub discharged_to_source_value: Option<String>,
    pub discharged_to_concept_id: Option<i32>,
    pub preceding_visit_detail_id: Option<i32>,
    pub parent_visit_detail_id: Option<i32>,
    pub visit_occurrence_id: i32,
}

impl CdmRecord for VisitDetail {
    fn table_name() -> &'static str {
        "visit_detail"
    }

    fn table_def() -> TableDef {
        tables::clinical::visit_detail()
    }
}

/// An event suggesting the presence of a disease or medical condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionOccurrence {
    pub condition_occurrence_id: i32,
    pub person_id: i32,
    pub condition_concept_id: i32,
    pub condition_start_date: NaiveDate,
    pub condition_start_datetime: Option<NaiveDateTime>,
    pub condition_end_date: Option<NaiveDate>,
    pub condition_end_datetime: Option<NaiveDateTime>,
    pub condition_type_concept_id: i32,
    pub condition_status_concept_id: Option<i32>,
    pub stop_reason: Option<String>,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub condition_source_value: Option<String>,
    pub condition_source_concept_id: Option<i32>,
    pub condition_status_source_value: Option<String>,
}

impl CdmRecord for ConditionOccurrence {
    fn table_name() -> &'static str {
        "condition_occurrence"
    }

    fn table_def() -> TableDef {
        tables::clinical::condition_occurrence()
    }
}

/// An exposure to a drug ingested or otherwise introduced into the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugExposure {
    pub drug_exposure_id: i32,
    pub person_id: i32,
    pub drug_concept_id: i32,
    pub drug_exposure_start_date: NaiveDate,
    pub drug_exposure_start_datetime: Option<NaiveDateTime>,
    pub drug_exposure_end_date: NaiveDate,
    pub drug_exposure_end_datetime: Option<NaiveDateTime>,
    pub verbatim_end_date: Option<NaiveDate>,
    pub drug_type_concept_id: i32,
    pub stop_reason: Option<String>,
    pub refills: Option<i32>,
    pub quantity: Option<f64>,
    pub days_supply: Option<i32>,
    pub sig: Option<String>,
    pub route_concept_id: Option<i32>,
    pub lot_number: Option<String>,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub drug_source_value: Option<String>,
    pub drug_source_concept_id: Option<i32>,
    pub route_source_value: Option<String>,
    pub dose_unit_source_value: Option<String>,
}

impl CdmRecord for DrugExposure {
    fn table_name() -> &'static str {
        "drug_exposure"
    }

    fn table_def() -> TableDef {
        tables::clinical::drug_exposure()
    }
}

/// An activity or process carried out on the patient with a diagnostic
/// or therapeutic purpose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureOccurrence {
    pub procedure_occurrence_id: i32,
    pub person_id: i32,
    pub procedure_concept_id: i32,
    pub procedure_date: NaiveDate,
    pub procedure_datetime: Option<NaiveDateTime>,
    pub procedure_end_date: Option<NaiveDate>,
    pub procedure_end_datetime: Option<NaiveDateTime>,
    pub procedure_type_concept_id: i32,
    pub modifier_concept_id: Option<i32>,
    pub quantity: Option<i32>,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub procedure_source_value: Option<String>,
    pub procedure_source_concept_id: Option<i32>,
    pub modifier_source_value: Option<String>,
}

impl CdmRecord for ProcedureOccurrence {
    fn table_name() -> &'static str {
        "procedure_occurrence"
    }

    fn table_def() -> TableDef {
        tables::clinical::procedure_occurrence()
    }
}

/// An exposure to a foreign physical object or instrument used for
/// diagnostic or therapeutic purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceExposure {
    pub device_exposure_id: i32,
    pub person_id: i32,
    pub device_concept_id: i32,
    pub device_exposure_start_date: NaiveDate,
    pub device_exposure_start_datetime: Option<NaiveDateTime>,
    pub device_exposure_end_date: Option<NaiveDate>,
    pub device_exposure_end_datetime: Option<NaiveDateTime>,
    pub device_type_concept_id: i32,
    pub unique_device_id: Option<String>,
    pub production_id: Option<String>,
    pub quantity: Option<i32>,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub device_source_value: Option<String>,
    pub device_source_concept_id: Option<i32>,
    pub unit_concept_id: Option<i32>,
    pub unit_source_value: Option<String>,
    pub unit_source_concept_id: Option<i32>,
}

impl CdmRecord for DeviceExposure {
    fn table_name() -> &'static str {
        "device_exposure"
    }

    fn table_def() -> TableDef {
        tables::clinical::device_exposure()
    }
}

/// A structured value obtained through standardized examination or
/// testing of a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub measurement_id: i32,
    pub person_id: i32,
    pub measurement_concept_id: i32,
    pub measurement_date: NaiveDate,
    pub measurement_datetime: Option<NaiveDateTime>,
    pub measurement_time: Option<String>,
    pub measurement_type_concept_id: i32,
    pub operator_concept_id: Option<i32>,
    pub value_as_number: Option<f64>,
    pub value_as_concept_id: Option<i32>,
    pub unit_concept_id: Option<i32>,
    pub range_low: Option<f64>,
    pub range_high: Option<f64>,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub measurement_source_value: Option<String>,
    pub measurement_source_concept_id: Option<i32>,
    pub unit_source_value: Option<String>,
    pub unit_source_concept_id: Option<i32>,
    pub value_source_value: Option<String>,
    pub measurement_event_id: Option<i32>,
    pub meas_event_field_concept_id: Option<i32>,
}

impl CdmRecord for Measurement {
    fn table_name() -> &'static str {
        "measurement"
    }

    fn table_def() -> TableDef {
        tables::clinical::measurement()
    }
}

/// A clinical fact obtained through examination, questioning or a
/// procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub observation_id: i32,
    pub person_id: i32,
    pub observation_concept_id: i32,
    pub observation_date: NaiveDate,
    pub observation_datetime: Option<NaiveDateTime>,
    pub observation_type_concept_id: i32,
    pub value_as_number: Option<f64>,
    pub value_as_string: Option<String>,
    pub value_as_concept_id: Option<i32>,
    pub qualifier_concept_id: Option<i32>,
    pub unit_concept_id: Option<i32>,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub observation_source_value: Option<String>,
    pub observation_source_concept_id: Option<i32>,
    pub unit_source_value: Option<String>,
    pub qualifier_source_value: Option<String>,
    pub value_source_value: Option<String>,
    pub observation_event_id: Option<i32>,
    pub obs_event_field_concept_id: Option<i32>,
}

impl CdmRecord for Observation {
    fn table_name() -> &'static str {
        "observation"
    }

    fn table_def() -> TableDef {
        tables::clinical::observation()
    }
}

/// The clinical event of how and when a person dies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Death {
    pub person_id: i32,
    pub death_date: NaiveDate,
    pub death_datetime: Option<NaiveDateTime>,
    pub death_type_concept_id: Option<i32>,
    pub cause_concept_id: Option<i32>,
    pub cause_source_value: Option<String>,
    pub cause_source_concept_id: Option<i32>,
}

impl CdmRecord for Death {
    fn table_name() -> &'static str {
        "death"
    }

    fn table_def() -> TableDef {
        tables::clinical::death()
    }
}

/// An unstructured free-text note recorded by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: i32,
    pub person_id: i32,
    pub note_date: NaiveDate,
    pub note_datetime: Option<NaiveDateTime>,
    pub note_type_concept_id: i32,
    pub note_class_concept_id: i32,
    pub note_title: Option<String>,
    pub note_text: String,
    pub encoding_concept_id: i32,
    pub language_concept_id: i32,
    pub provider_id: Option<i32>,
    pub visit_occurrence_id: Option<i32>,
    pub visit_detail_id: Option<i32>,
    pub note_source_value: Option<String>,
    pub note_event_id: Option<i32>,
    pub note_event_field_concept_id: Option<i32>,
}

impl CdmRecord for Note {
    fn table_name() -> &'static str {
        "note"
    }

    fn table_def() -> TableDef {
        tables::clinical::note()
    }
}

/// A single term extracted from a note by natural language processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteNlp {
    pub note_nlp_id: i32,
    pub note_id: i32,
    pub section_concept_id: Option<i32>,
    pub snippet: Option<String>,
    pub offset: Option<String>,
    pub lexical_variant: String,
    pub note_nlp_concept_id: Option<i32>,
    pub note_nlp_source_concept_id: Option<i32>,
    pub nlp_system: Option<String>,
    pub nlp_date: NaiveDate,
    pub nlp_datetime: Option<NaiveDateTime>,
    pub term_exists: Option<String>,
    pub term_temporal: Option<String>,
    pub term_modifiers: Option<String>,
}

impl CdmRecord for NoteNlp {
    fn table_name() -> &'static str {
        "note_nlp"
    }

    fn table_def() -> TableDef {
        tables::clinical::note_nlp()
    }
}

/// A biological sample taken from a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specimen {
    pub specimen_id: i32,
    pub person_id: i32,
    pub specimen_concept_id: i32,
    pub specimen_type_concept_id: i32,
    pub specimen_date: NaiveDate,
    pub specimen_datetime: Option<NaiveDateTime>,
    pub quantity: Option<f64>,
    pub unit_concept_id: Option<i32>,
    pub anatomic_site_concept_id: Option<i32>,
    pub disease_status_concept_id: Option<i32>,
    pub specimen_source_id: Option<String>,
    pub specimen_source_value: Option<String>,
    pub unit_source_value: Option<String>,
    pub anatomic_site_source_value: Option<String>,
    pub disease_status_source_value: Option<String>,
}

impl CdmRecord for Specimen {
    fn table_name() -> &'static str {
        "specimen"
    }

    fn table_def() -> TableDef {
        tables::clinical::specimen()
    }
}

/// A relationship between two facts stored in any CDM tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRelationship {
    pub domain_concept_id_1: i32,
    pub fact_id_1: i32,
    pub domain_concept_id_2: i32,
    pub fact_id_2: i32,
    pub relationship_concept_id: i32,
}

impl CdmRecord for FactRelationship {
    fn table_name() -> &'static str {
        "fact_relationship"
    }

    fn table_def() -> TableDef {
        tables::clinical::fact_relationship()
    }
}

/// An aggregation of lower-level clinical events into a disease phase,
/// outcome or treatment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_id: i32,
    pub person_id: i32,
    pub episode_concept_id: i32,
    pub episode_start_date: NaiveDate,
    pub episode_start_datetime: Option<NaiveDateTime>,
    pub episode_end_date: Option<NaiveDate>,
    pub episode_end_datetime: Option<NaiveDateTime>,
    pub episode_parent_id: Option<i32>,
    pub episode_number: Option<i32>,
    pub episode_object_concept_id: i32,
    pub episode_type_concept_id: i32,
    pub episode_source_value: Option<String>,
    pub episode_source_concept_id: Option<i32>,
}

impl CdmRecord for Episode {
    fn table_name() -> &'static str {
        "episode"
    }

    fn table_def() -> TableDef {
        tables::clinical::episode()
    }
}

/// A link between a qualifying clinical event and its episode entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeEvent {
    pub episode_id: i32,
    pub event_id: i32,
    pub episode_event_field_concept_id: i32,
}

impl CdmRecord for EpisodeEvent {
    fn table_name() -> &'static str {
        "episode_event"
    }

    fn table_def() -> TableDef {
        tables::clinical::episode_event()
    }
}
