//! Unified column and table definition system
//!
//! This module centralizes the declaration primitives used by every OMOP
//! CDM table in the crate.

pub mod field;
pub mod table_def;

pub use field::{ColumnDef, ColumnType};
pub use table_def::TableDef;
