use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use omop_cdm::models::{CdmRecord, ObservationPeriod, Person};
use omop_cdm::{
    find_parquet_files, read_records, read_table, read_table_async, read_table_files, CdmError,
};
use parquet::arrow::ArrowWriter;
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_periods() -> Vec<ObservationPeriod> {
    vec![
        ObservationPeriod {
            observation_period_id: 1,
            person_id: 1,
            observation_period_start_date: date(2015, 1, 1),
            observation_period_end_date: date(2019, 12, 31),
            period_type_concept_id: 32817,
        },
        ObservationPeriod {
            observation_period_id: 2,
            person_id: 2,
            observation_period_start_date: date(2018, 6, 1),
            observation_period_end_date: date(2022, 5, 31),
            period_type_concept_id: 32817,
        },
    ]
}

fn write_records<T: CdmRecord>(path: &Path, records: &[T]) {
    let batch = T::to_record_batch(records).expect("conversion to batch failed");
    let file = File::create(path).expect("failed to create file");
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).expect("failed to create writer");
    writer.write(&batch).expect("failed to write batch");
    writer.close().expect("failed to close writer");
}

#[test]
fn written_table_reads_back() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("observation_period.parquet");
    write_records(&path, &sample_periods());

    let table = ObservationPeriod::table_def();
    let batches = read_table(&path, &table).expect("read failed");
    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(rows, 2);
}

#[test]
fn typed_read_roundtrips() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("observation_period.parquet");
    let periods = sample_periods();
    write_records(&path, &periods);

    let read_back: Vec<ObservationPeriod> = read_records(&path).expect("typed read failed");
    assert_eq!(read_back, periods);
}

#[test]
fn wrong_table_declaration_is_rejected() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("observation_period.parquet");
    write_records(&path, &sample_periods());

    // A person declaration requires columns this file does not carry
    let err = read_table(&path, &Person::table_def()).unwrap_err();
    assert!(matches!(err, CdmError::Schema { .. }), "got {err:?}");
    assert!(err.to_string().contains("person"));
}

#[test]
fn missing_file_is_an_io_error() {
    init_logging();
    let err = read_table(
        Path::new("/nonexistent/observation_period.parquet"),
        &ObservationPeriod::table_def(),
    )
    .unwrap_err();
    assert!(matches!(err, CdmError::Io(_)));
}

#[test]
fn multiple_files_read_in_combination() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    let periods = sample_periods();
    let first = dir.path().join("observation_period_0.parquet");
    let second = dir.path().join("observation_period_1.parquet");
    write_records(&first, &periods[..1]);
    write_records(&second, &periods[1..]);

    let table = ObservationPeriod::table_def();
    let batches = read_table_files(&[first, second], &table).expect("multi-file read failed");
    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(rows, periods.len());
}

#[test]
fn incompatible_file_fails_the_multi_file_read() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    let good = dir.path().join("observation_period.parquet");
    let bad = dir.path().join("person.parquet");
    write_records(&good, &sample_periods());
    write_records(
        &bad,
        &[Person {
            person_id: 1,
            gender_concept_id: 8507,
            year_of_birth: 1980,
            month_of_birth: None,
            day_of_birth: None,
            birth_datetime: None,
            race_concept_id: 0,
            ethnicity_concept_id: 0,
            location_id: None,
            provider_id: None,
            care_site_id: None,
            person_source_value: None,
            gender_source_value: None,
            gender_source_concept_id: None,
            race_source_value: None,
            race_source_concept_id: None,
            ethnicity_source_value: None,
            ethnicity_source_concept_id: None,
        }],
    );

    let table = ObservationPeriod::table_def();
    let err = read_table_files(&[good, bad], &table).unwrap_err();
    assert!(matches!(err, CdmError::Schema { .. }), "got {err:?}");
}

#[test]
fn finds_only_parquet_files() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    write_records(
        &dir.path().join("observation_period.parquet"),
        &sample_periods(),
    );
    std::fs::write(dir.path().join("notes.txt"), "not a data file").unwrap();

    let files = find_parquet_files(dir.path()).expect("listing failed");
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("observation_period.parquet"));
}

#[tokio::test]
async fn async_read_matches_sync_read() {
    init_logging();
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("observation_period.parquet");
    write_records(&path, &sample_periods());

    let table = ObservationPeriod::table_def();
    let sync_rows: usize = read_table(&path, &table)
        .expect("sync read failed")
        .iter()
        .map(|b| b.num_rows())
        .sum();
    let async_rows: usize = read_table_async(&path, &table, None)
        .await
        .expect("async read failed")
        .iter()
        .map(|b| b.num_rows())
        .sum();
    assert_eq!(sync_rows, async_rows);
}
