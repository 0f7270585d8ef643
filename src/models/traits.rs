//! Traits shared by the CDM record models

use crate::error::Result;
use crate::schema::field_def::TableDef;
use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_arrow::schema::{SchemaLike, TracingOptions};

/// A typed record of one CDM table
///
/// Ties a record struct to its table declaration and provides Arrow
/// `RecordBatch` conversion through `serde_arrow`. Field names equal the
/// CDM column names, so conversion needs no mapping layer.
pub trait CdmRecord: Sized + Serialize + DeserializeOwned {
    /// The CDM table name for this record type
    fn table_name() -> &'static str;

    /// The table declaration for this record type
    fn table_def() -> TableDef;

    /// The Arrow fields `serde_arrow` uses for this record type
    fn serde_fields() -> Result<Vec<FieldRef>> {
        Ok(Vec::<FieldRef>::from_type::<Self>(
            TracingOptions::default().allow_null_fields(true),
        )?)
    }

    /// Convert a `RecordBatch` to a vector of records
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch::<Vec<Self>>(batch)?)
    }

    /// Convert a slice of records to a `RecordBatch`
    fn to_record_batch(records: &[Self]) -> Result<RecordBatch> {
        let fields = Self::serde_fields()?;
        Ok(serde_arrow::to_record_batch(&fields, &records)?)
    }
}
