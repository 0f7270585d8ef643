//! Typed record models for the CDM tables
//!
//! Each struct mirrors the declared column layout of one table and
//! implements [`CdmRecord`], which provides Arrow record batch
//! conversion through serde.

mod clinical;
mod derived;
mod economics;
mod health_system;
mod metadata;
mod traits;
mod vocabulary;

pub use clinical::{
    ConditionOccurrence, Death, DeviceExposure, DrugExposure, Episode, EpisodeEvent,
    FactRelationship, Measurement, Note, NoteNlp, Observation, ObservationPeriod, Person,
    ProcedureOccurrence, Specimen, VisitDetail, VisitOccurrence,
};
pub use derived::{Cohort, CohortDefinition, ConditionEra, DoseEra, DrugEra};
pub use economics::{Cost, PayerPlanPeriod};
pub use health_system::{CareSite, Location, Provider};
pub use metadata::{CdmSource, Metadata};
pub use traits::CdmRecord;
pub use vocabulary::{
    Concept, ConceptAncestor, ConceptClass, ConceptRelationship, ConceptSynonym, Domain,
    DrugStrength, Relationship, SourceToConceptMap, Vocabulary,
};
