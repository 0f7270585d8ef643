//! Table declarations, typed records and Parquet readers for the OMOP
//! Common Data Model v5.x.
//!
//! The crate declares every CDM table with its exact column names, types
//! and relationships, exposes one serde-backed record struct per table,
//! and reads Parquet files against those declarations with schema
//! validation and column projection.

pub mod catalog;
pub mod error;
pub mod models;
pub mod reader;
pub mod schema;
pub mod tables;

// Re-export the most common types for easier use
// Core types
pub use catalog::{Catalog, CatalogIssue, CatalogReport};
pub use error::{CdmError, Result};
pub use schema::{
    check_table_compatibility, ColumnDef, ColumnType, SchemaCompatibilityReport, SchemaIssue,
    TableDef,
};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Reading
pub use reader::{
    find_parquet_files, read_records, read_table, read_table_async, read_table_files,
    DEFAULT_BATCH_SIZE,
};

// Typed records
pub use models::{
    CareSite, CdmRecord, CdmSource, Cohort, CohortDefinition, Concept, ConceptAncestor,
    ConceptClass, ConceptRelationship, ConceptSynonym, ConditionEra, ConditionOccurrence, Cost,
    Death, DeviceExposure, Domain, DoseEra, DrugEra, DrugExposure, DrugStrength, Episode,
    EpisodeEvent, FactRelationship, Location, Measurement, Metadata, Note, NoteNlp, Observation,
    ObservationPeriod, PayerPlanPeriod, Person, ProcedureOccurrence, Provider, Relationship,
    SourceToConceptMap, Specimen, VisitDetail, VisitOccurrence, Vocabulary,
};
