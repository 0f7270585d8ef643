use omop_cdm::catalog::Catalog;
use omop_cdm::schema::ColumnType;

#[test]
fn cdm_catalog_declares_all_tables() {
    let catalog = Catalog::cdm();
    assert_eq!(catalog.len(), 39, "CDM v5.4 declares 39 tables");

    let expected = [
        // Vocabulary
        "concept",
        "vocabulary",
        "domain",
        "concept_class",
        "concept_relationship",
        "relationship",
        "concept_synonym",
        "concept_ancestor",
        "source_to_concept_map",
        "drug_strength",
        // Clinical
        "person",
        "observation_period",
        "visit_occurrence",
        "visit_detail",
        "condition_occurrence",
        "drug_exposure",
        "procedure_occurrence",
        "device_exposure",
        "measurement",
        "observation",
        "death",
        "note",
        "note_nlp",
        "specimen",
        "fact_relationship",
        "episode",
        "episode_event",
        // Health system
        "location",
        "care_site",
        "provider",
        // Health economics
        "payer_plan_period",
        "cost",
        // Derived elements
        "drug_era",
        "dose_era",
        "condition_era",
        "cohort",
        "cohort_definition",
        // Metadata
        "cdm_source",
        "metadata",
    ];
    for name in expected {
        assert!(
            catalog.get(name).is_some(),
            "table '{name}' missing from catalog"
        );
    }
}

#[test]
fn cdm_catalog_is_structurally_valid() {
    let catalog = Catalog::cdm();
    let report = catalog.validate();
    assert!(
        report.valid,
        "catalog validation failed: {:?}",
        report.issues
    );
    assert!(report.issues.is_empty());
    catalog.ensure_valid().unwrap();
}

#[test]
fn every_foreign_key_resolves_to_a_declared_primary_key() {
    let catalog = Catalog::cdm();
    for table in catalog.tables() {
        for fk in table.foreign_keys() {
            let target_name = fk.references.as_deref().unwrap();
            let target = catalog
                .get(target_name)
                .unwrap_or_else(|| panic!("{}.{} references unknown table", table.name, fk.name));
            let pk = target.primary_key().unwrap_or_else(|| {
                panic!(
                    "{}.{} references '{}', which has no primary key",
                    table.name, fk.name, target_name
                )
            });
            assert_eq!(
                fk.column_type, pk.column_type,
                "{}.{} type differs from {}.{}",
                table.name, fk.name, target_name, pk.name
            );
        }
    }
}

#[test]
fn tables_declare_at_most_one_primary_key() {
    let catalog = Catalog::cdm();
    for table in catalog.tables() {
        let pk_count = table.columns.iter().filter(|c| c.primary_key).count();
        assert!(
            pk_count <= 1,
            "table '{}' declares {pk_count} primary keys",
            table.name
        );
    }
    // Spot-check a few well-known keys
    assert_eq!(
        catalog.get("person").unwrap().primary_key().unwrap().name,
        "person_id"
    );
    assert_eq!(
        catalog.get("concept").unwrap().primary_key().unwrap().name,
        "concept_id"
    );
    // Link and definition tables carry no single-column key
    assert!(catalog.get("fact_relationship").unwrap().primary_key().is_none());
    assert!(catalog.get("cohort").unwrap().primary_key().is_none());
    assert!(catalog.get("cdm_source").unwrap().primary_key().is_none());
}

#[test]
fn person_columns_match_the_standard() {
    let catalog = Catalog::cdm();
    let person = catalog.get("person").unwrap();
    assert_eq!(
        person.column_names(),
        vec![
            "person_id",
            "gender_concept_id",
            "year_of_birth",
            "month_of_birth",
            "day_of_birth",
            "birth_datetime",
            "race_concept_id",
            "ethnicity_concept_id",
            "location_id",
            "provider_id",
            "care_site_id",
            "person_source_value",
            "gender_source_value",
            "gender_source_concept_id",
            "race_source_value",
            "race_source_concept_id",
            "ethnicity_source_value",
            "ethnicity_source_concept_id",
        ]
    );
}

#[test]
fn concept_columns_match_the_standard() {
    let catalog = Catalog::cdm();
    let concept = catalog.get("concept").unwrap();
    assert_eq!(
        concept.column_names(),
        vec![
            "concept_id",
            "concept_name",
            "domain_id",
            "vocabulary_id",
            "concept_class_id",
            "standard_concept",
            "concept_code",
            "valid_start_date",
            "valid_end_date",
            "invalid_reason",
        ]
    );

    // Vocabulary cross-references are string keys, not surrogate integers
    let domain_id = concept.column("domain_id").unwrap();
    assert_eq!(domain_id.column_type, ColumnType::String);
    assert_eq!(domain_id.references.as_deref(), Some("domain"));
    let vocabulary_id = concept.column("vocabulary_id").unwrap();
    assert_eq!(vocabulary_id.references.as_deref(), Some("vocabulary"));
}

#[test]
fn concept_relationship_uses_numbered_concept_columns() {
    let catalog = Catalog::cdm();
    let table = catalog.get("concept_relationship").unwrap();
    assert!(table.has_column("concept_id_1"));
    assert!(table.has_column("concept_id_2"));
    assert!(table.has_column("relationship_id"));
    assert_eq!(
        table.column("concept_id_1").unwrap().references.as_deref(),
        Some("concept")
    );
}

#[test]
fn fact_relationship_uses_numbered_domain_columns() {
    let catalog = Catalog::cdm();
    let table = catalog.get("fact_relationship").unwrap();
    assert_eq!(
        table.column_names(),
        vec![
            "domain_concept_id_1",
            "fact_id_1",
            "domain_concept_id_2",
            "fact_id_2",
            "relationship_concept_id",
        ]
    );
}

#[test]
fn measurement_columns_match_the_standard() {
    let catalog = Catalog::cdm();
    let measurement = catalog.get("measurement").unwrap();
    assert_eq!(
        measurement.column_names(),
        vec![
            "measurement_id",
            "person_id",
            "measurement_concept_id",
            "measurement_date",
            "measurement_datetime",
            "measurement_time",
            "measurement_type_concept_id",
            "operator_concept_id",
            "value_as_number",
            "value_as_concept_id",
            "unit_concept_id",
            "range_low",
            "range_high",
            "provider_id",
            "visit_occurrence_id",
            "visit_detail_id",
            "measurement_source_value",
            "measurement_source_concept_id",
            "unit_source_value",
            "unit_source_concept_id",
            "value_source_value",
            "measurement_event_id",
            "meas_event_field_concept_id",
        ]
    );
}

#[test]
fn cost_domain_reference_is_a_string_key() {
    let catalog = Catalog::cdm();
    let cost = catalog.get("cost").unwrap();
    let cost_domain = cost.column("cost_domain_id").unwrap();
    assert_eq!(cost_domain.column_type, ColumnType::String);
    assert_eq!(cost_domain.references.as_deref(), Some("domain"));
}

#[test]
fn catalog_exports_json() {
    let catalog = Catalog::cdm();
    let json = catalog.to_json().unwrap();
    assert!(json.contains("\"person\""));
    assert!(json.contains("\"drug_exposure\""));
    assert!(json.contains("\"concept_ancestor\""));
}
