use catalog_core::normalize::{
    normalize_batch, normalize_external, normalize_response, NormalizeError,
};
use catalog_core::types::FallbackCounter;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

fn bare_item() -> Value {
    json!({ "volumeInfo": {} })
}

fn item_with_ids(ids: Value) -> Value {
    json!({ "volumeInfo": { "title": "Dune", "industryIdentifiers": ids } })
}

#[test]
fn fallback_counter_starts_at_one_and_advances_per_item() {
    let items = vec![bare_item(), bare_item(), bare_item()];
    let records = normalize_batch(&items);

    for (i, record) in records.iter().enumerate() {
        let expected = format!("No disponible nº{}", i + 1);
        assert_eq!(record.isbn_codes.len(), 1);
        assert_eq!(record.isbn_codes[0].scheme, "ISBN");
        assert_eq!(record.isbn_codes[0].identifier, expected);
        assert_eq!(record.primary_isbn, format!("ISBN-{expected}"));
    }
}

#[test]
fn counter_scope_is_one_batch() {
    let first = normalize_batch(&[bare_item()]);
    let second = normalize_batch(&[bare_item()]);

    assert_eq!(first[0].isbn_codes[0].identifier, "No disponible nº1");
    assert_eq!(second[0].isbn_codes[0].identifier, "No disponible nº1");
}

#[test]
fn blank_first_identifier_scheme_falls_back_to_synthesis() {
    let item = item_with_ids(json!([{ "type": "   ", "identifier": "9780441013593" }]));
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    assert_eq!(record.isbn_codes.len(), 1);
    assert_eq!(record.isbn_codes[0].scheme, "ISBN");
    assert_eq!(record.isbn_codes[0].identifier, "No disponible nº1");
    assert_eq!(record.primary_isbn, "ISBN-No disponible nº1");
}

#[test]
fn missing_identifier_list_falls_back_to_synthesis() {
    let item = json!({ "volumeInfo": { "title": "Dune" } });
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    assert_eq!(record.isbn_codes[0].identifier, "No disponible nº1");
}

#[test]
fn source_identifiers_are_kept_whole_when_first_is_usable() {
    let item = item_with_ids(json!([
        { "type": "ISBN_13", "identifier": "9780441013593" },
        { "type": "ISBN_10", "identifier": "0441013597" },
    ]));
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    assert_eq!(record.isbn_codes.len(), 2);
    assert_eq!(record.isbn_codes[0].scheme, "ISBN_13");
    assert_eq!(record.isbn_codes[1].identifier, "0441013597");
}

#[test]
fn primary_isbn_always_matches_first_code() {
    let items = vec![
        bare_item(),
        item_with_ids(json!([{ "type": "ISBN_13", "identifier": "9780441013593" }])),
        item_with_ids(json!([{ "type": "", "identifier": "x" }])),
    ];
    let records = normalize_batch(&items);

    for record in &records {
        let first = &record.isbn_codes[0];
        assert_eq!(
            record.primary_isbn,
            format!("{}-{}", first.scheme, first.identifier)
        );
    }
}

#[test]
fn missing_or_unparseable_dates_normalize_to_now() {
    let missing = bare_item();
    let garbage = json!({ "volumeInfo": { "publishedDate": "not a date" } });
    let impossible = json!({ "volumeInfo": { "publishedDate": "2020-13-40" } });

    let records = normalize_batch(&[missing, garbage, impossible]);
    let now = Utc::now();

    for record in &records {
        let delta = (now - record.publication_date).num_seconds().abs();
        assert!(delta < 5, "publication date should be normalization time");
    }
}

#[test]
fn parseable_dates_are_kept() {
    let item = json!({ "volumeInfo": { "publishedDate": "1965-08-01" } });
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    let expected = Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap();
    assert_eq!(record.publication_date, expected);
}

#[test]
fn year_only_dates_resolve_to_january_first() {
    let item = json!({ "volumeInfo": { "publishedDate": "1965" } });
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    let expected = Utc.with_ymd_and_hms(1965, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(record.publication_date, expected);
}

#[test]
fn placeholders_cover_missing_title_and_authors() {
    let records = normalize_batch(&[bare_item()]);

    assert_eq!(records[0].title, "Título no disponible");
    assert_eq!(records[0].authors, vec!["Autor no disponible".to_string()]);
}

#[test]
fn blank_title_gets_the_placeholder_too() {
    let item = json!({ "volumeInfo": { "title": "   " } });
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    assert_eq!(record.title, "Título no disponible");
}

#[test]
fn absent_categories_and_description_stay_null() {
    let records = normalize_batch(&[bare_item()]);

    assert_eq!(records[0].genres, None);
    assert_eq!(records[0].description, None);
}

#[test]
fn populated_volume_fields_pass_through() {
    let item = json!({
        "volumeInfo": {
            "title": "Dune",
            "authors": ["Frank Herbert"],
            "publishedDate": "1965-08-01",
            "categories": ["Science Fiction"],
            "industryIdentifiers": [{ "type": "ISBN_13", "identifier": "9780441013593" }],
            "description": "Arrakis, the desert planet.",
        }
    });
    let mut counter = FallbackCounter::new();
    let record = normalize_external(&item, &mut counter);

    assert_eq!(record.title, "Dune");
    assert_eq!(record.authors, vec!["Frank Herbert".to_string()]);
    assert_eq!(record.genres, Some(vec!["Science Fiction".to_string()]));
    assert_eq!(record.primary_isbn, "ISBN_13-9780441013593");
    assert_eq!(
        record.description,
        Some("Arrakis, the desert planet.".to_string())
    );
}

#[test]
fn response_envelope_without_items_is_rejected() {
    let no_items = json!({ "kind": "books#volumes", "totalItems": 0 });
    assert!(matches!(
        normalize_response(&no_items),
        Err(NormalizeError::NoVolumeItems)
    ));

    let empty_items = json!({ "kind": "books#volumes", "items": [] });
    assert!(matches!(
        normalize_response(&empty_items),
        Err(NormalizeError::NoVolumeItems)
    ));
}

#[test]
fn response_envelope_normalizes_every_item() {
    let payload = json!({
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [bare_item(), bare_item()],
    });

    let records = normalize_response(&payload).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].isbn_codes[0].identifier, "No disponible nº2");
}
