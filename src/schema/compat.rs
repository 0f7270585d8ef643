//! Schema compatibility checks between data files and declared tables
//!
//! Files produced by ETL pipelines do not always carry the exact Arrow
//! types the declarations use (dates as strings, 64-bit integers for
//! identifier columns, etc.). The checks here distinguish columns that
//! match exactly, columns that can be converted on read, and columns that
//! are genuinely incompatible with the declaration.

use crate::schema::field_def::TableDef;
use arrow::datatypes::{DataType, Schema};

/// How a source Arrow type relates to a declared column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCompatibility {
    /// Types match exactly
    Exact,
    /// Types differ but the source can be converted to the target
    Compatible,
    /// The source cannot represent the declared column
    Incompatible,
}

/// Classify a source Arrow type against a declared target type
#[must_use]
pub fn check_type_compatibility(source: &DataType, target: &DataType) -> TypeCompatibility {
    use DataType::{
        Date32, Date64, Decimal128, Float16, Float32, Float64, Int8, Int16, Int32, Int64,
        LargeUtf8, Timestamp, UInt8, UInt16, UInt32, UInt64, Utf8,
    };

    if source == target {
        return TypeCompatibility::Exact;
    }

    let integral = |dt: &DataType| {
        matches!(
            dt,
            Int8 | Int16 | Int32 | Int64 | UInt8 | UInt16 | UInt32 | UInt64
        )
    };
    let textual = |dt: &DataType| matches!(dt, Utf8 | LargeUtf8);
    let temporal = |dt: &DataType| matches!(dt, Date32 | Date64 | Timestamp(_, _));

    let compatible = match target {
        // Identifier and count columns accept any integral width
        _ if integral(target) => integral(source),
        // Decimal columns accept floats, decimals and integers
        Float64 => {
            integral(source) || matches!(source, Float16 | Float32 | Decimal128(_, _))
        }
        // Text columns accept either Arrow string encoding
        _ if textual(target) => textual(source),
        // Temporal columns accept other temporal encodings or parseable strings
        _ if temporal(target) => temporal(source) || textual(source),
        _ => false,
    };

    if compatible {
        TypeCompatibility::Compatible
    } else {
        TypeCompatibility::Incompatible
    }
}

/// The kind of problem found for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A non-nullable declared column is absent from the file
    MissingColumn,
    /// The file's type cannot be converted to the declared type
    IncompatibleType,
    /// The file allows nulls in a column declared non-nullable
    NullabilityViolation,
}

impl IssueKind {
    /// Whether this issue makes the file unusable for the table
    #[must_use]
    pub fn is_fatal(self) -> bool {
        matches!(self, IssueKind::MissingColumn | IssueKind::IncompatibleType)
    }
}

/// A single schema compatibility issue
#[derive(Debug, Clone)]
pub struct SchemaIssue {
    /// The declared column with the problem
    pub column: String,
    /// The kind of problem
    pub kind: IssueKind,
    /// Description of the issue
    pub description: String,
}

/// Result of checking a file schema against a declared table
#[derive(Debug, Clone)]
pub struct SchemaCompatibilityReport {
    /// The declared table name
    pub table: String,
    /// Whether the file can be read as this table
    pub compatible: bool,
    /// Issues found, fatal and advisory
    pub issues: Vec<SchemaIssue>,
}

impl SchemaCompatibilityReport {
    /// Issues that make the file unusable for the table
    pub fn fatal_issues(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.issues.iter().filter(|issue| issue.kind.is_fatal())
    }
}

/// Check a file's Arrow schema against a declared CDM table
///
/// Extra columns in the file are ignored; they are dropped by projection
/// on read. Nullable declared columns may be absent entirely.
#[must_use]
pub fn check_table_compatibility(
    file_schema: &Schema,
    table: &TableDef,
) -> SchemaCompatibilityReport {
    let mut issues = Vec::new();

    for column in &table.columns {
        let Ok(file_field) = file_schema.field_with_name(&column.name) else {
            if !column.nullable {
                issues.push(SchemaIssue {
                    column: column.name.clone(),
                    kind: IssueKind::MissingColumn,
                    description: format!(
                        "required column '{}' is missing from the file",
                        column.name
                    ),
                });
            }
            continue;
        };

        let target = column.column_type.to_arrow_type();
        match check_type_compatibility(file_field.data_type(), &target) {
            TypeCompatibility::Exact | TypeCompatibility::Compatible => {}
            TypeCompatibility::Incompatible => {
                issues.push(SchemaIssue {
                    column: column.name.clone(),
                    kind: IssueKind::IncompatibleType,
                    description: format!(
                        "column '{}': {:?} cannot be converted to {:?}",
                        column.name,
                        file_field.data_type(),
                        target
                    ),
                });
            }
        }

        if file_field.is_nullable() && !column.nullable {
            issues.push(SchemaIssue {
                column: column.name.clone(),
                kind: IssueKind::NullabilityViolation,
                description: format!(
                    "column '{}' is declared non-nullable but the file allows nulls",
                    column.name
                ),
            });
        }
    }

    let compatible = !issues.iter().any(|issue| issue.kind.is_fatal());

    SchemaCompatibilityReport {
        table: table.name.clone(),
        compatible,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};
    use arrow::datatypes::{Field, TimeUnit};

    fn table() -> TableDef {
        TableDef::new(
            "observation_period",
            "Spans of time with expected clinical event capture",
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

    #[test]
    fn exact_schema_is_compatible() {
        let table = table();
        let report = check_table_compatibility(&table.arrow_schema(), &table);
        assert!(report.compatible);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn convertible_types_are_compatible() {
        // Int64 identifiers and string dates, as common ETL output
        let file_schema = Schema::new(vec![
            Field::new("observation_period_id", DataType::Int64, false),
            Field::new("person_id", DataType::Int64, false),
            Field::new("observation_period_start_date", DataType::Utf8, false),
            Field::new("observation_period_end_date", DataType::Utf8, false),
            Field::new("period_type_concept_id", DataType::Int32, false),
        ]);
        let report = check_table_compatibility(&file_schema, &table());
        assert!(report.compatible);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let file_schema = Schema::new(vec![
            Field::new("observation_period_id", DataType::Int32, false),
            Field::new("person_id", DataType::Int32, false),
        ]);
        let report = check_table_compatibility(&file_schema, &table());
        assert!(!report.compatible);
        assert!(
            report
                .fatal_issues()
                .any(|issue| issue.column == "observation_period_start_date")
        );
    }

    #[test]
    fn incompatible_type_is_fatal() {
        let file_schema = Schema::new(vec![
            Field::new("observation_period_id", DataType::Boolean, false),
            Field::new("person_id", DataType::Int32, false),
            Field::new("observation_period_start_date", DataType::Date32, false),
            Field::new("observation_period_end_date", DataType::Date32, false),
            Field::new("period_type_concept_id", DataType::Int32, false),
        ]);
        let report = check_table_compatibility(&file_schema, &table());
        assert!(!report.compatible);
        assert_eq!(report.fatal_issues().count(), 1);
    }

    #[test]
    fn nullability_violation_is_advisory() {
        let file_schema = Schema::new(vec![
            Field::new("observation_period_id", DataType::Int32, true),
            Field::new("person_id", DataType::Int32, false),
            Field::new("observation_period_start_date", DataType::Date32, false),
            Field::new("observation_period_end_date", DataType::Date32, false),
            Field::new("period_type_concept_id", DataType::Int32, false),
        ]);
        let report = check_table_compatibility(&file_schema, &table());
        assert!(report.compatible);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::NullabilityViolation);
    }

    #[test]
    fn timestamp_variants_accepted_for_datetime() {
        let compat = check_type_compatibility(
            &DataType::Timestamp(TimeUnit::Nanosecond, None),
            &DataType::Timestamp(TimeUnit::Microsecond, None),
        );
        assert_eq!(compat, TypeCompatibility::Compatible);
    }
}
