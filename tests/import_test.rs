use std::path::PathBuf;

use chrono::NaiveDate;
use importer::error::AppError;
use importer::models::{ImporterConfig, Location, PositionOpening, RawFeed, Ttl};
use importer::pipeline::{ImportSummary, RecordExtractor, run_import};
use importer::storage::{JsonFileSink, MemorySink, PositionOpeningSink};
use serde_json::{Value, json};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn far_away() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 31).unwrap()
}

fn far_away_ttl() -> String {
    format!("{}d", (far_away() - today()).num_days())
}

/// Import a fixture into a memory sink and return the single batch.
fn import_fixture(name: &str) -> (ImportSummary, Vec<PositionOpening>) {
    let config = ImporterConfig::default();
    let extractor = RecordExtractor::new(&config, today());
    let feed = RawFeed::load(fixture(name)).unwrap();
    let mut sink = MemorySink::default();

    let summary = run_import(&feed, &extractor, &mut sink).unwrap();
    assert_eq!(sink.batches().len(), 1, "sink must be called exactly once");

    (summary, sink.batches()[0].clone())
}

fn to_json(records: &[PositionOpening]) -> Vec<Value> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).unwrap())
        .collect()
}

#[test]
fn imports_active_sample_as_full_records() {
    let (summary, records) = import_fixture("sample.xml");
    assert_eq!(summary.full, 3);

    let ttl = far_away_ttl();
    let records = to_json(&records);
    assert_eq!(
        records[0],
        json!({
            "type": "position_opening", "source": "usajobs", "external_id": 305972200,
            "_ttl": ttl, "position_title": "Medical Officer", "tags": ["federal"],
            "organization_id": "AF09", "organization_name": "Air Force Personnel Center",
            "locations": [{"city": "Dyess AFB", "state": "TX"}],
            "start_date": "2011-12-28", "end_date": "2099-01-31",
            "minimum": 60274, "maximum": 155500, "rate_interval_code": "PA",
            "position_schedule_type_code": 1, "position_offering_type_code": 15327
        })
    );
    assert_eq!(
        records[1],
        json!({
            "type": "position_opening", "source": "usajobs", "external_id": 325054900,
            "_ttl": ttl, "position_title": "Physician (Surgical Critical Care)", "tags": ["federal"],
            "organization_id": "VATA",
            "organization_name": "Veterans Affairs, Veterans Health Administration",
            "locations": [{"city": "Charleston", "state": "SC"}],
            "start_date": "2012-08-27", "end_date": "2099-01-31",
            "minimum": 125000, "maximum": 295000, "rate_interval_code": "PA",
            "position_schedule_type_code": 2, "position_offering_type_code": 15317
        })
    );
    assert_eq!(
        records[2],
        json!({
            "type": "position_opening", "source": "usajobs", "external_id": 327358300,
            "_ttl": ttl, "position_title": "Student Nurse Technicians", "tags": ["federal"],
            "organization_id": "VATA",
            "organization_name": "Veterans Affairs, Veterans Health Administration",
            "locations": [
                {"city": "Odessa", "state": "TX"},
                {"city": "Pentagon, Arlington", "state": "VA"},
                {"city": "San Angelo", "state": "TX"},
                {"city": "Abilene", "state": "TX"}
            ],
            "start_date": "2012-09-19", "end_date": "2099-01-31",
            "minimum": 17, "maximum": 23, "rate_interval_code": "PH",
            "position_schedule_type_code": 2, "position_offering_type_code": 15522
        })
    );
}

#[test]
fn imports_inactive_records_with_immediate_ttl() {
    let (summary, records) = import_fixture("anti_sample.xml");
    assert_eq!(summary.minimal, 3);

    let records = to_json(&records);
    assert_eq!(
        records,
        vec![
            json!({"type": "position_opening", "source": "usajobs", "external_id": 305972200,
                   "_ttl": "1s", "tags": ["federal"],
                   "locations": [{"city": "Dyess AFB", "state": "TX"}]}),
            json!({"type": "position_opening", "source": "usajobs", "external_id": 325054900,
                   "_ttl": "1s", "tags": ["federal"],
                   "locations": [{"city": "Charleston", "state": "SC"}]}),
            json!({"type": "position_opening", "source": "usajobs", "external_id": 327358300,
                   "_ttl": "1s", "tags": ["federal"],
                   "locations": [{"city": "Odessa", "state": "TX"},
                                 {"city": "Pentagon, Arlington", "state": "VA"},
                                 {"city": "San Angelo", "state": "TX"},
                                 {"city": "Abilene", "state": "TX"}]}),
        ]
    );
}

#[test]
fn ignores_invalid_locations_and_skips_entries_without_id() {
    let (summary, records) = import_fixture("bad_locations.xml");
    assert_eq!(
        summary,
        ImportSummary {
            total: 3,
            full: 2,
            minimal: 0,
            rejected: 1
        }
    );

    assert_eq!(records[0].locations(), &[Location::new("Fulton", "MD")]);
    assert_eq!(records[0].ttl(), Ttl::Days((far_away() - today()).num_days()));

    assert_eq!(
        serde_json::to_value(&records[1]).unwrap(),
        json!({
            "type": "position_opening", "source": "usajobs", "external_id": 325054900,
            "_ttl": far_away_ttl(), "position_title": "Physician (Surgical Critical Care)",
            "tags": ["federal"], "organization_id": "VATA",
            "organization_name": "Veterans Affairs, Veterans Health Administration",
            "locations": [],
            "start_date": "2012-08-27", "end_date": "2099-01-31",
            "minimum": 125000, "maximum": 295000, "rate_interval_code": "PA",
            "position_schedule_type_code": 2, "position_offering_type_code": 15317
        })
    );
}

#[test]
fn recruiting_announcement_imports_minimal_without_locations() {
    let (_, records) = import_fixture("recruiting_sample.xml");

    assert_eq!(
        to_json(&records),
        vec![json!({"type": "position_opening", "source": "usajobs",
                    "external_id": 327358300, "_ttl": "1s",
                    "tags": ["federal"], "locations": []})]
    );
}

#[test]
fn malformed_document_never_reaches_sink() {
    let result = RawFeed::load(fixture("malformed.xml"));
    assert!(matches!(result, Err(AppError::Xml(_))));
}

#[test]
fn json_file_sink_receives_full_batch() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = ImporterConfig::default();
    let extractor = RecordExtractor::new(&config, today());
    let feed = RawFeed::load(fixture("sample.xml")).unwrap();
    let mut sink = JsonFileSink::new(tmp.path().join("openings.json"));

    run_import(&feed, &extractor, &mut sink).unwrap();

    let written: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(sink.path()).unwrap()).unwrap();
    let ids: Vec<u64> = written
        .iter()
        .map(|r| r["external_id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![305972200, 325054900, 327358300]);
    assert_eq!(sink.name(), "json-file");
}
