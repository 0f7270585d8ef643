//! Schema declaration and compatibility machinery
//!
//! `field_def` holds the declaration primitives; `compat` checks data
//! files against the declarations.

pub mod compat;
pub mod field_def;

pub use compat::{
    IssueKind, SchemaCompatibilityReport, SchemaIssue, TypeCompatibility,
    check_table_compatibility, check_type_compatibility,
};
pub use field_def::{ColumnDef, ColumnType, TableDef};
