//! 자유 입력 문자열을 해석해 변환 결과 표시 문자열로 만든다.
//!
//! 결과는 세 가지뿐이다: 빈 입력 자리표시("-"), 해석 오류("Error"), 계산된 값.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::conversion::{ConversionError, Converter};
use crate::quantity::QuantityKind;
use crate::units::{TemperatureUnit, UnitCatalog};

/// 변환 결과 표시에 쓰는 유효 숫자 개수.
pub const SIGNIFICANT_DIGITS: usize = 11;

pub const PLACEHOLDER: &str = "-";
pub const ERROR_MARKER: &str = "Error";

/// 화면에 표시되는 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayValue {
    Placeholder,
    ErrorMarker,
    Formatted(String),
}

impl DisplayValue {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayValue::Placeholder => PLACEHOLDER,
            DisplayValue::ErrorMarker => ERROR_MARKER,
            DisplayValue::Formatted(s) => s,
        }
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 입력 문자열 해석 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// 빈 문자열, "-", "." 처럼 아직 입력 중인 상태
    Blank,
    /// 숫자로 해석할 수 없음
    Invalid,
    Number(f64),
}

/// 입력 문자열을 숫자로 해석한다. 앞뒤 공백은 무시한다.
pub fn parse_input(raw: &str) -> ParsedInput {
    if raw.is_empty() || raw == "-" || raw == "." {
        return ParsedInput::Blank;
    }
    match raw.trim().parse::<f64>() {
        Ok(v) => ParsedInput::Number(v),
        Err(_) => ParsedInput::Invalid,
    }
}

/// 입력을 해석하고 `compute` 로 계산한 뒤 11 자리 유효 숫자로 표시한다.
///
/// `compute` 의 오류는 입력 오류가 아니라 호출 측 계약 위반이므로 그대로 전파한다.
pub fn parse_and_format_with<E>(
    raw: &str,
    compute: impl FnOnce(f64) -> Result<f64, E>,
) -> Result<DisplayValue, E> {
    match parse_input(raw) {
        ParsedInput::Blank => Ok(DisplayValue::Placeholder),
        ParsedInput::Invalid => Ok(DisplayValue::ErrorMarker),
        ParsedInput::Number(v) => Ok(DisplayValue::Formatted(format_general(
            compute(v)?,
            SIGNIFICANT_DIGITS,
        ))),
    }
}

/// `printf("%.*g")` 와 같은 일반 형식으로 숫자를 표시한다.
///
/// 유효 숫자 `precision` 자리로 반올림한 뒤 지수가 -4 이상 `precision` 미만이면
/// 고정 소수점, 아니면 지수 표기를 쓰고 끝의 0 과 소수점은 제거한다.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// 변환 결과를 11 자리 유효 숫자 문자열로 만든다.
pub fn format_value(value: f64) -> String {
    format_general(value, SIGNIFICANT_DIGITS)
}

/// 카탈로그와 현재 선택된 변환기로 입력 문자열을 표시값으로 바꾼다.
pub fn render(
    catalog: &UnitCatalog,
    converter: &Converter,
    raw: &str,
) -> Result<DisplayValue, ConversionError> {
    parse_and_format_with(raw, |v| converter.apply(catalog, v))
}

/// 변환기 하나의 단위 선택 상태. 카탈로그는 외부에서 주입받아 여러 세션이 공유한다.
#[derive(Debug, Clone)]
pub struct ConversionSession {
    catalog: Arc<UnitCatalog>,
    converter: Converter,
}

impl ConversionSession {
    pub fn new(catalog: Arc<UnitCatalog>, converter: Converter) -> Self {
        Self { catalog, converter }
    }

    /// 변환기 종류의 기본 단위 쌍으로 세션을 연다.
    pub fn for_kind(catalog: Arc<UnitCatalog>, kind: QuantityKind) -> Result<Self, ConversionError> {
        let converter = Converter::default_for(kind, &catalog)?;
        Ok(Self::new(catalog, converter))
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// 현재 카테고리에서 고를 수 있는 단위 이름들 (카탈로그 순서).
    pub fn unit_options(&self) -> Vec<&str> {
        match &self.converter {
            Converter::Ratio { category, .. } => self
                .catalog
                .units_of(category)
                .map(|units| units.iter().map(|u| u.name.as_str()).collect())
                .unwrap_or_default(),
            Converter::Temperature { .. } => TemperatureUnit::ALL.iter().map(|u| u.name()).collect(),
        }
    }

    /// 현재 선택된 (입력, 출력) 단위 이름.
    pub fn selected_units(&self) -> (&str, &str) {
        match &self.converter {
            Converter::Ratio { from, to, .. } => (from.as_str(), to.as_str()),
            Converter::Temperature { from, to } => (from.name(), to.name()),
        }
    }

    /// 단위 선택을 바꾼다. 카탈로그에 없는 단위면 기존 선택을 유지하고 오류를 반환한다.
    pub fn select_units(&mut self, from: &str, to: &str) -> Result<(), ConversionError> {
        let category = self.converter.category().to_string();
        self.converter = Converter::from_names(&self.catalog, &category, from, to)?;
        Ok(())
    }

    pub fn parse_and_format(&self, raw: &str) -> Result<DisplayValue, ConversionError> {
        render(&self.catalog, &self.converter, raw)
    }
}
