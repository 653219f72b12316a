//! 기본 단위 카탈로그 구성과 조회 계약 테스트.
use piping_toolbox::conversion::ConversionError;
use piping_toolbox::units::{CatalogError, UnitCatalog, UnitCategory, UnitEntry};

#[test]
fn standard_catalog_lists_nine_categories_in_order() {
    let catalog = UnitCatalog::standard();
    assert_eq!(
        catalog.list_categories(),
        vec![
            "길이",
            "넓이",
            "부피",
            "무게",
            "압력",
            "동적 유속",
            "정적 유속",
            "부피 유량",
            "질량 유량",
        ]
    );
}

#[test]
fn standard_catalog_satisfies_invariants() {
    let catalog = UnitCatalog::standard();
    let rebuilt = UnitCatalog::new(catalog.categories().to_vec()).expect("valid catalog");
    assert_eq!(rebuilt, catalog);
}

#[test]
fn length_units_follow_display_order() {
    let catalog = UnitCatalog::standard();
    let names: Vec<&str> = catalog
        .units_of("길이")
        .expect("length")
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Millimeter", "Centimeter", "Meter", "Kilometer", "Inch", "Foot", "Yard", "Mile"]
    );
    let pair = catalog.category("길이").and_then(|c| c.default_pair());
    assert_eq!(pair, Some(("Millimeter", "Centimeter")));
}

#[test]
fn factor_lookup_golden_values() {
    let catalog = UnitCatalog::standard();
    assert_eq!(catalog.factor_of("길이", "Inch").unwrap(), 0.0254);
    assert_eq!(catalog.factor_of("압력", "Kilopascal").unwrap(), 0.001);
    assert_eq!(catalog.factor_of("압력", "kgf/cm²").unwrap(), 0.0980665);
    assert_eq!(catalog.factor_of("넓이", "mi²").unwrap(), 2589988.110336);
    assert_eq!(catalog.factor_of("질량 유량", "lb/s").unwrap(), 1632.9325);
    assert_eq!(catalog.factor_of("부피 유량", "barrel/hr").unwrap(), 0.158987);
}

#[test]
fn unknown_unit_and_category_are_reported() {
    let catalog = UnitCatalog::standard();
    assert_eq!(
        catalog.factor_of("길이", "Furlong"),
        Err(ConversionError::UnknownUnit {
            category: "길이".into(),
            unit: "Furlong".into(),
        })
    );
    assert_eq!(
        catalog.factor_of("속도", "m/s"),
        Err(ConversionError::UnknownCategory("속도".into()))
    );
    assert!(catalog.units_of("온도").is_err());
}

#[test]
fn single_unit_category_defaults_to_same_unit() {
    let cat = UnitCategory::new("단일", vec![UnitEntry::new("one", 1.0)]);
    assert_eq!(cat.default_pair(), Some(("one", "one")));
}

#[test]
fn invalid_catalogs_are_rejected() {
    let empty = UnitCatalog::new(vec![UnitCategory::new("빈", vec![])]);
    assert_eq!(empty, Err(CatalogError::EmptyCategory("빈".into())));

    let dup = UnitCatalog::new(vec![UnitCategory::new(
        "길이",
        vec![UnitEntry::new("m", 1.0), UnitEntry::new("m", 2.0)],
    )]);
    assert!(matches!(dup, Err(CatalogError::DuplicateUnit { .. })));

    let zero = UnitCatalog::new(vec![UnitCategory::new(
        "길이",
        vec![UnitEntry::new("m", 0.0)],
    )]);
    assert!(matches!(zero, Err(CatalogError::InvalidFactor { .. })));

    let twice = UnitCatalog::new(vec![
        UnitCategory::new("a", vec![UnitEntry::new("x", 1.0)]),
        UnitCategory::new("a", vec![UnitEntry::new("y", 1.0)]),
    ]);
    assert_eq!(twice, Err(CatalogError::DuplicateCategory("a".into())));
}
