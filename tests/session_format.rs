//! 입력 해석과 11 자리 유효 숫자 표시 테스트.
use piping_toolbox::conversion::Converter;
use piping_toolbox::quantity::QuantityKind;
use piping_toolbox::session::{
    format_general, format_value, parse_and_format_with, parse_input, render, ConversionSession,
    DisplayValue, ParsedInput,
};
use piping_toolbox::units::UnitCatalog;
use std::sync::Arc;

fn identity(raw: &str) -> DisplayValue {
    parse_and_format_with(raw, |v| Ok::<_, ()>(v)).unwrap()
}

#[test]
fn blank_inputs_show_placeholder() {
    for raw in ["", "-", "."] {
        assert_eq!(identity(raw), DisplayValue::Placeholder, "{raw:?}");
        assert_eq!(identity(raw).as_str(), "-");
    }
}

#[test]
fn unparseable_inputs_show_error_marker() {
    for raw in ["abc", "--", "-.", "1,5", "1.2.3", " ", "+"] {
        assert_eq!(identity(raw), DisplayValue::ErrorMarker, "{raw:?}");
    }
    assert_eq!(identity("abc").to_string(), "Error");
}

#[test]
fn numeric_inputs_are_formatted() {
    assert_eq!(identity("1.5"), DisplayValue::Formatted("1.5".into()));
    assert_eq!(identity(" 2 ").as_str(), "2");
    assert_eq!(identity("1e3").as_str(), "1000");
    assert_eq!(identity("-0.25").as_str(), "-0.25");
    assert_eq!(parse_input("7"), ParsedInput::Number(7.0));
}

#[test]
fn general_format_matches_printf_g() {
    assert_eq!(format_value(0.1), "0.1");
    assert_eq!(format_value(1.0 / 3.0), "0.33333333333");
    assert_eq!(format_value(2.0 / 3.0), "0.66666666667");
    assert_eq!(format_value(1000.0), "1000");
    assert_eq!(format_value(0.0001), "0.0001");
    assert_eq!(format_value(1e-5), "1e-05");
    assert_eq!(format_value(12345678901.0), "12345678901");
    assert_eq!(format_value(123456789012345.0), "1.2345678901e+14");
    assert_eq!(format_value(1e16), "1e+16");
    assert_eq!(format_value(-2.5e-7), "-2.5e-07");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(f64::INFINITY), "inf");
    assert_eq!(format_general(3.14159, 3), "3.14");
    assert_eq!(format_general(0.61895306859, 4), "0.619");
}

#[test]
fn rendering_through_catalog() {
    let catalog = UnitCatalog::standard();
    let to_meter = Converter::from_names(&catalog, "길이", "Millimeter", "Meter").unwrap();
    assert_eq!(render(&catalog, &to_meter, "100").unwrap().as_str(), "0.1");

    let to_inch = Converter::from_names(&catalog, "길이", "Meter", "Inch").unwrap();
    assert_eq!(render(&catalog, &to_inch, "1").unwrap().as_str(), "39.37007874");

    let psi = Converter::from_names(&catalog, "압력", "psi", "Kilopascal").unwrap();
    assert_eq!(render(&catalog, &psi, "1").unwrap().as_str(), "6.8947573");
    assert_eq!(render(&catalog, &psi, "x").unwrap(), DisplayValue::ErrorMarker);
}

#[test]
fn session_switches_units() {
    let catalog = Arc::new(UnitCatalog::standard());
    let mut session = ConversionSession::for_kind(catalog, QuantityKind::Temperature).unwrap();
    assert_eq!(session.parse_and_format("0").unwrap().as_str(), "32");
    session.select_units("Celsius", "Kelvin").unwrap();
    assert_eq!(session.parse_and_format("100").unwrap().as_str(), "373.15");
    assert!(session.select_units("Celsius", "Rankine").is_err());
    // 잘못된 선택은 기존 선택을 유지한다.
    assert_eq!(session.parse_and_format("0").unwrap().as_str(), "273.15");
    assert_eq!(session.parse_and_format("").unwrap(), DisplayValue::Placeholder);
}

#[test]
fn session_lists_and_reports_selected_units() {
    let catalog = Arc::new(UnitCatalog::standard());
    let mut session = ConversionSession::for_kind(Arc::clone(&catalog), QuantityKind::Length).unwrap();
    assert_eq!(
        session.unit_options(),
        vec!["Millimeter", "Centimeter", "Meter", "Kilometer", "Inch", "Foot", "Yard", "Mile"]
    );
    assert_eq!(session.selected_units(), ("Millimeter", "Centimeter"));

    session.select_units("Meter", "Foot").unwrap();
    assert_eq!(session.selected_units(), ("Meter", "Foot"));
    assert_eq!(session.parse_and_format("1").unwrap().as_str(), "3.280839895");

    assert!(session.select_units("Meter", "Furlong").is_err());
    assert_eq!(session.selected_units(), ("Meter", "Foot"));

    let temp = ConversionSession::for_kind(catalog, QuantityKind::Temperature).unwrap();
    assert_eq!(temp.unit_options(), vec!["Celsius", "Fahrenheit", "Kelvin"]);
    assert_eq!(temp.selected_units(), ("Celsius", "Fahrenheit"));
}
