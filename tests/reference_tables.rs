//! 참조 데이터 표 로드 테스트.
use std::fs;

use piping_toolbox::piping::{ReferenceError, ReferenceKind, ReferenceTableStore};

const ALL_KEYS: [&str; 5] = [
    "stress_data",
    "casting_data",
    "longitu_data",
    "weld_data",
    "coefficient_data",
];

#[test]
fn missing_file_yields_five_empty_tables() {
    let store = ReferenceTableStore::load("/nonexistent/dir/piping_data.json");
    for key in ALL_KEYS {
        let table = store.get(key).expect("key present");
        assert!(table.rows.is_empty(), "{key}");
    }
    assert_eq!(store.keys().count(), 5);
    for kind in ReferenceKind::ALL {
        assert!(store.table(kind).is_empty());
    }
}

#[test]
fn loads_tables_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("piping_data.json");
    fs::write(
        &path,
        r#"{
            "stress_data": [["Material", "-29~38", "100"], ["A106 B", 138, 138.0]],
            "coefficient_data": [["Material", "<=482"], ["Ferritic", "0.4"], ["Note", null]]
        }"#,
    )
    .unwrap();

    let store = ReferenceTableStore::load(&path);
    let stress = store.table(ReferenceKind::Stress);
    assert_eq!(stress.key, "stress_data");
    assert_eq!(
        stress.header().unwrap(),
        ["Material".to_string(), "-29~38".into(), "100".into()]
    );
    assert_eq!(stress.body(), [vec!["A106 B".to_string(), "138".into(), "138.0".into()]]);
    assert_eq!(stress.column_count(), 3);

    let coeff = store.table(ReferenceKind::Coefficient);
    assert_eq!(coeff.rows.len(), 3);
    assert_eq!(coeff.rows[2][1], "");

    // 파일에 없던 키는 빈 표
    assert!(store.table(ReferenceKind::Weld).is_empty());
}

#[test]
fn unrecognized_keys_are_kept() {
    let store = ReferenceTableStore::from_json_str(r#"{"flange_data": [["Class"], ["150"]]}"#)
        .expect("valid json");
    assert_eq!(store.get("flange_data").map(|t| t.rows.len()), Some(2));
    assert_eq!(store.keys().count(), 6);
    assert!(matches!(
        store.require("gasket_data"),
        Err(ReferenceError::UnknownKey(_))
    ));
}

#[test]
fn malformed_documents_fall_back_to_empty() {
    assert!(matches!(
        ReferenceTableStore::from_json_str("{ not json"),
        Err(ReferenceError::Json(_))
    ));
    assert!(matches!(
        ReferenceTableStore::from_json_str(r#"{"stress_data": "oops"}"#),
        Err(ReferenceError::InvalidShape { .. })
    ));
    assert!(matches!(
        ReferenceTableStore::from_json_str(r#"{"stress_data": [1, 2]}"#),
        Err(ReferenceError::InvalidShape { .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[]").unwrap();
    let store = ReferenceTableStore::load(&path);
    assert_eq!(store, ReferenceTableStore::empty());
}

#[test]
fn kind_keys_round_trip() {
    for (kind, key) in ReferenceKind::ALL.into_iter().zip(ALL_KEYS) {
        assert_eq!(kind.key(), key);
        assert_eq!(ReferenceKind::from_key(key), Some(kind));
    }
}

#[test]
fn bundled_sample_data_parses() {
    let content = include_str!("../piping_data.json");
    let store = ReferenceTableStore::from_json_str(content).expect("bundled data");
    for kind in ReferenceKind::ALL {
        let table = store.table(kind);
        assert!(table.header().is_some(), "{}", kind.key());
        assert!(!table.body().is_empty(), "{}", kind.key());
    }
}
