//! Sorting keyed and hybrid records, and failure behaviour on collections
//! that do not match the resolved field.

use std::collections::{BTreeMap, HashMap};

use fieldsort_core::{
    FieldAccess, FieldKind, FieldSort, SortDirection, SortError, SortStrategy,
    Sorter, build_comparator, impl_record, sort_batches,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
struct Track {
    title: String,
    plays: u32,
    tags: HashMap<String, String>,
}

impl_record!(Track { title, plays } keyed tags);

fn track(title: &str, plays: u32, genre: Option<&str>) -> Track {
    let mut tags = HashMap::new();
    if let Some(genre) = genre {
        tags.insert("genre".to_string(), genre.to_string());
    }
    Track {
        title: title.to_string(),
        plays,
        tags,
    }
}

fn titles(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn hybrid_records_prefer_struct_fields() {
    let mut tracks = vec![
        track("b", 10, Some("rock")),
        track("a", 30, Some("jazz")),
        track("c", 20, None),
    ];
    let cmp =
        build_comparator(&tracks[0], "plays", SortDirection::Descending)
            .unwrap();
    assert_eq!(cmp.field().access, FieldAccess::Structural);
    FieldSort::new(cmp).try_sort(&mut tracks).unwrap();
    assert_eq!(titles(&tracks), vec!["a", "c", "b"]);
}

#[test]
fn hybrid_records_fall_back_to_map_keys() {
    let mut tracks = vec![
        track("b", 10, Some("rock")),
        track("untagged", 0, None),
        track("a", 30, Some("jazz")),
    ];
    let cmp = build_comparator(&tracks[0], "genre", SortDirection::Descending)
        .unwrap();
    assert_eq!(cmp.field().access, FieldAccess::Keyed);
    assert_eq!(cmp.kind(), FieldKind::String);
    FieldSort::new(cmp).try_sort(&mut tracks).unwrap();
    // Records without the key are missing and go last.
    assert_eq!(titles(&tracks), vec!["b", "a", "untagged"]);
}

#[test]
fn map_records_sort_by_key() {
    let mut rows: Vec<BTreeMap<String, f64>> = [3.5, -1.0, 2.25]
        .iter()
        .map(|v| BTreeMap::from([("score".to_string(), *v)]))
        .collect();
    let cmp = build_comparator(&rows[0], "score", SortDirection::Ascending)
        .unwrap();
    FieldSort::new(cmp).try_sort(&mut rows).unwrap();
    let scores: Vec<f64> = rows.iter().map(|row| row["score"]).collect();
    assert_eq!(scores, vec![-1.0, 2.25, 3.5]);
}

#[test]
fn heterogeneous_collection_aborts_without_reordering() {
    let mut items = vec![
        json!({"id": 3, "age": 40}),
        json!({"id": 1, "age": "forty"}),
        json!({"id": 2, "age": 20}),
    ];
    let original = items.clone();
    let err = Sorter::new()
        .sort_by_field(&mut items, "age", None)
        .unwrap_err();
    assert_eq!(
        err,
        SortError::ValueExtraction {
            field: "age".to_string(),
            expected: FieldKind::Integer,
            found: "string",
        }
    );
    assert!(!err.is_construction_error());
    assert_eq!(items, original);
}

#[test]
fn unsupported_kinds_fail_at_construction() {
    let items = [json!({"flag": true}), json!({"tags": ["a", "b"]})];
    let err = build_comparator(&items[0], "flag", SortDirection::Ascending)
        .unwrap_err();
    assert!(matches!(err, SortError::UnsupportedKind { kind: "bool", .. }));
    let err = build_comparator(&items[1], "tags", SortDirection::Ascending)
        .unwrap_err();
    assert!(matches!(err, SortError::UnsupportedKind { kind: "array", .. }));
}

fn float_rows() -> Vec<HashMap<String, Option<f64>>> {
    vec![
        HashMap::from([("v".to_string(), None)]),
        HashMap::from([("v".to_string(), Some(f64::NAN))]),
        HashMap::from([("v".to_string(), Some(1.0))]),
        HashMap::from([("v".to_string(), Some(-2.0))]),
    ]
}

#[test]
fn ascending_floats_put_nan_after_numbers_and_before_missing() {
    let mut rows = float_rows();
    let cmp = build_comparator(&rows[2], "v", SortDirection::Ascending).unwrap();
    FieldSort::new(cmp).try_sort(&mut rows).unwrap();
    let values: Vec<Option<f64>> = rows.iter().map(|row| row["v"]).collect();
    assert_eq!(values[0], Some(-2.0));
    assert_eq!(values[1], Some(1.0));
    assert!(values[2].is_some_and(f64::is_nan));
    assert_eq!(values[3], None);
}

#[test]
fn descending_floats_lead_with_nan_and_keep_missing_last() {
    let mut rows = float_rows();
    let cmp =
        build_comparator(&rows[2], "v", SortDirection::Descending).unwrap();
    FieldSort::new(cmp).try_sort(&mut rows).unwrap();
    let values: Vec<Option<f64>> = rows.iter().map(|row| row["v"]).collect();
    assert!(values[0].is_some_and(f64::is_nan));
    assert_eq!(values[1], Some(1.0));
    assert_eq!(values[2], Some(-2.0));
    assert_eq!(values[3], None);
}

#[test]
fn one_comparator_sorts_disjoint_batches() {
    let cmp = build_comparator(
        &json!({"name": ""}),
        "name",
        SortDirection::Ascending,
    )
    .unwrap();
    let mut batches: Vec<Vec<Value>> = (0..8)
        .map(|batch| {
            (0..50)
                .rev()
                .map(|i| json!({"name": format!("{batch}-{i:03}")}))
                .collect()
        })
        .collect();

    let results = sort_batches(&cmp, &mut batches);

    assert!(results.iter().all(Result::is_ok));
    for (batch, items) in batches.iter().enumerate() {
        assert_eq!(items[0]["name"], format!("{batch}-000"));
        assert_eq!(items[49]["name"], format!("{batch}-049"));
    }
}
