//! Parquet reading against declared CDM tables
//!
//! Readers here validate a file's schema against a [`TableDef`] before any
//! data is materialized, project the file down to the declared columns, and
//! surface the rest as Arrow record batches. A typed convenience layer on
//! top deserializes batches into [`CdmRecord`] structs.

use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use futures::TryStreamExt;
use itertools::Itertools;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::async_reader::ParquetRecordBatchStreamBuilder;
use parquet::arrow::ProjectionMask;
use rayon::prelude::*;

use crate::error::{CdmError, Result};
use crate::models::CdmRecord;
use crate::schema::{check_table_compatibility, TableDef};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Build a projection mask covering the declared columns present in the
/// file. Returns `None` when the file carries no extra columns, in which
/// case projection is a no-op.
fn declared_projection(
    table: &TableDef,
    file_schema: &arrow::datatypes::Schema,
    parquet_schema: &parquet::schema::types::SchemaDescriptor,
) -> Option<ProjectionMask> {
    let indices: Vec<usize> = table
        .columns
        .iter()
        .filter_map(|column| file_schema.index_of(&column.name).ok())
        .collect_vec();

    if indices.len() == file_schema.fields().len() {
        None
    } else {
        Some(ProjectionMask::leaves(parquet_schema, indices))
    }
}

/// Verify a file schema against the declared table, failing on fatal
/// issues and logging advisory ones.
fn ensure_compatible(
    file_schema: &arrow::datatypes::Schema,
    table: &TableDef,
    path: &Path,
) -> Result<()> {
    let report = check_table_compatibility(file_schema, table);
    for issue in &report.issues {
        if !issue.kind.is_fatal() {
            log::warn!("{}: {}", table.name, issue.description);
        }
    }
    if report.compatible {
        Ok(())
    } else {
        let detail = report
            .fatal_issues()
            .map(|issue| issue.description.as_str())
            .join("; ");
        Err(CdmError::schema(&table.name, path, detail))
    }
}

/// Read a Parquet file as a declared CDM table
///
/// The file schema is checked against the declaration first; extra columns
/// are dropped by projection, and declared columns absent from the file
/// are tolerated only when nullable.
///
/// # Errors
/// Returns an error if the file cannot be opened, is not valid Parquet, or
/// its schema is incompatible with the table declaration.
pub fn read_table(path: &Path, table: &TableDef) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log::debug!("Reading {} from {}", table.name, path.display());

    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    ensure_compatible(builder.schema(), table, path)?;

    let projection = declared_projection(table, builder.schema(), builder.parquet_schema());
    let reader = match projection {
        Some(mask) => builder.with_projection(mask).build()?,
        None => builder.build()?,
    };

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    log::info!(
        "Read {} batches of {} from {} in {:?}",
        batches.len(),
        table.name,
        path.display(),
        start.elapsed()
    );
    Ok(batches)
}

/// Read several Parquet files of the same table in parallel
///
/// # Errors
/// Returns the first error encountered; all files must be readable as the
/// declared table.
pub fn read_table_files(paths: &[PathBuf], table: &TableDef) -> Result<Vec<RecordBatch>> {
    let per_file: Vec<Result<Vec<RecordBatch>>> = paths
        .par_iter()
        .map(|path| read_table(path, table))
        .collect();

    let mut combined = Vec::new();
    for batches in per_file {
        combined.extend(batches?);
    }

    log::info!(
        "Read {} batches of {} from {} files",
        combined.len(),
        table.name,
        paths.len()
    );
    Ok(combined)
}

/// Find all Parquet files directly under a directory, sorted by name
///
/// # Errors
/// Returns an error if the path is not a readable directory.
pub fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let files = std::fs::read_dir(dir)?
        .filter_map_ok(|entry| {
            let path = entry.path();
            (path.is_file() && path.extension().is_some_and(|ext| ext == "parquet"))
                .then_some(path)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if files.is_empty() {
        log::warn!("No Parquet files found in {}", dir.display());
    }
    Ok(files)
}

/// Read a Parquet file asynchronously as a declared CDM table
///
/// Streams batches without loading the whole file at once. Schema
/// validation and projection behave as in [`read_table`].
///
/// # Errors
/// Returns an error if the file cannot be opened, is not valid Parquet, or
/// its schema is incompatible with the table declaration.
pub async fn read_table_async(
    path: &Path,
    table: &TableDef,
    batch_size: Option<usize>,
) -> Result<Vec<RecordBatch>> {
    log::debug!("Reading {} from {} (async)", table.name, path.display());

    let file = tokio::fs::File::open(path).await?;
    let mut builder = ParquetRecordBatchStreamBuilder::new(file).await?;

    ensure_compatible(builder.schema(), table, path)?;

    if let Some(mask) = declared_projection(table, builder.schema(), builder.parquet_schema()) {
        builder = builder.with_projection(mask);
    }
    builder = builder.with_batch_size(batch_size.unwrap_or(DEFAULT_BATCH_SIZE));

    let stream = builder.build()?;
    let batches = stream.try_collect::<Vec<_>>().await?;

    log::info!(
        "Read {} batches of {} from {}",
        batches.len(),
        table.name,
        path.display()
    );
    Ok(batches)
}

/// Read a Parquet file into typed records for one table
///
/// # Errors
/// Returns an error if the file cannot be read as the record's table or a
/// batch cannot be deserialized into `T`.
pub fn read_records<T: CdmRecord>(path: &Path) -> Result<Vec<T>> {
    let table = T::table_def();
    let batches = read_table(path, &table)?;

    let mut records = Vec::new();
    for batch in &batches {
        records.extend(T::from_record_batch(batch)?);
    }
    Ok(records)
}
