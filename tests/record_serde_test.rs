use chrono::NaiveDate;
use omop_cdm::models::{CdmRecord, Concept, DrugEra, Measurement, Person};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_persons() -> Vec<Person> {
    vec![
        Person {
            person_id: 1,
            gender_concept_id: 8507,
            year_of_birth: 1980,
            month_of_birth: Some(4),
            day_of_birth: Some(12),
            birth_datetime: Some(date(1980, 4, 12).and_hms_opt(8, 30, 0).unwrap()),
            race_concept_id: 8527,
            ethnicity_concept_id: 38003564,
            location_id: Some(42),
            provider_id: None,
            care_site_id: Some(7),
            person_source_value: Some("P-0001".to_string()),
            gender_source_value: Some("M".to_string()),
            gender_source_concept_id: None,
            race_source_value: Some("white".to_string()),
            race_source_concept_id: None,
            ethnicity_source_value: None,
            ethnicity_source_concept_id: None,
        },
        Person {
            person_id: 2,
            gender_concept_id: 8532,
            year_of_birth: 1955,
            month_of_birth: None,
            day_of_birth: None,
            birth_datetime: None,
            race_concept_id: 0,
            ethnicity_concept_id: 0,
            location_id: None,
            provider_id: Some(13),
            care_site_id: None,
            person_source_value: Some("P-0002".to_string()),
            gender_source_value: Some("F".to_string()),
            gender_source_concept_id: None,
            race_source_value: None,
            race_source_concept_id: None,
            ethnicity_source_value: None,
            ethnicity_source_concept_id: None,
        },
    ]
}

#[test]
fn person_roundtrips_through_record_batch() {
    let persons = sample_persons();

    let batch = Person::to_record_batch(&persons).expect("Failed to convert to RecordBatch");
    assert_eq!(batch.num_rows(), 2);
    assert_eq!(batch.num_columns(), Person::table_def().columns.len());

    let roundtrip = Person::from_record_batch(&batch).expect("Failed to convert back to Persons");
    assert_eq!(roundtrip, persons);
    assert_eq!(roundtrip[0].birth_datetime, persons[0].birth_datetime);
    assert_eq!(roundtrip[1].month_of_birth, None);
}

#[test]
fn concept_roundtrips_through_record_batch() {
    let concepts = vec![
        Concept {
            concept_id: 201826,
            concept_name: "Type 2 diabetes mellitus".to_string(),
            domain_id: "Condition".to_string(),
            vocabulary_id: "SNOMED".to_string(),
            concept_class_id: "Clinical Finding".to_string(),
            standard_concept: Some("S".to_string()),
            concept_code: "44054006".to_string(),
            valid_start_date: date(2002, 1, 31),
            valid_end_date: date(2099, 12, 31),
            invalid_reason: None,
        },
        Concept {
            concept_id: 1112807,
            concept_name: "aspirin".to_string(),
            domain_id: "Drug".to_string(),
            vocabulary_id: "RxNorm".to_string(),
            concept_class_id: "Ingredient".to_string(),
            standard_concept: Some("S".to_string()),
            concept_code: "1191".to_string(),
            valid_start_date: date(1970, 1, 1),
            valid_end_date: date(2099, 12, 31),
            invalid_reason: None,
        },
    ];

    let batch = Concept::to_record_batch(&concepts).expect("Failed to convert to RecordBatch");
    let roundtrip = Concept::from_record_batch(&batch).expect("Failed to convert back to Concepts");
    assert_eq!(roundtrip, concepts);
}

#[test]
fn measurement_roundtrips_with_sparse_optionals() {
    let measurements = vec![Measurement {
        measurement_id: 501,
        person_id: 1,
        measurement_concept_id: 3004249,
        measurement_date: date(2021, 6, 15),
        measurement_datetime: None,
        measurement_time: None,
        measurement_type_concept_id: 32817,
        operator_concept_id: None,
        value_as_number: Some(120.0),
        value_as_concept_id: None,
        unit_concept_id: Some(8876),
        range_low: Some(90.0),
        range_high: Some(140.0),
        provider_id: None,
        visit_occurrence_id: Some(9001),
        visit_detail_id: None,
        measurement_source_value: Some("BP-SYS".to_string()),
        measurement_source_concept_id: None,
        unit_source_value: Some("mmHg".to_string()),
        unit_source_concept_id: None,
        value_source_value: None,
        measurement_event_id: None,
        meas_event_field_concept_id: None,
    }];

    let batch = Measurement::to_record_batch(&measurements).expect("conversion failed");
    let roundtrip = Measurement::from_record_batch(&batch).expect("conversion back failed");
    assert_eq!(roundtrip, measurements);
    assert_eq!(roundtrip[0].value_as_number, Some(120.0));
}

#[test]
fn drug_era_roundtrips_through_record_batch() {
    let eras = vec![
        DrugEra {
            drug_era_id: 1,
            person_id: 1,
            drug_concept_id: 1112807,
            drug_era_start_date: date(2020, 1, 1),
            drug_era_end_date: date(2020, 3, 31),
            drug_exposure_count: Some(3),
            gap_days: Some(5),
        },
        DrugEra {
            drug_era_id: 2,
            person_id: 2,
            drug_concept_id: 1112807,
            drug_era_start_date: date(2020, 2, 14),
            drug_era_end_date: date(2020, 2, 28),
            drug_exposure_count: None,
            gap_days: None,
        },
    ];

    let batch = DrugEra::to_record_batch(&eras).expect("conversion failed");
    let roundtrip = DrugEra::from_record_batch(&batch).expect("conversion back failed");
    assert_eq!(roundtrip, eras);
}

#[test]
fn empty_record_slice_produces_empty_batch() {
    let batch = Person::to_record_batch(&[]).expect("conversion of empty slice failed");
    assert_eq!(batch.num_rows(), 0);
    let roundtrip = Person::from_record_batch(&batch).expect("conversion back failed");
    assert!(roundtrip.is_empty());
}
