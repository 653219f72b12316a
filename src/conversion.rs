use crate::quantity::QuantityKind;
use crate::units::{convert_temperature, TemperatureUnit, UnitCatalog};

/// 단위 변환 시 발생 가능한 오류.
///
/// 화면 계층이 카탈로그에서 단위를 고르는 한 발생하지 않아야 하는 계약 위반이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 카탈로그에 없는 카테고리
    UnknownCategory(String),
    /// 카테고리 안에 없는 단위
    UnknownUnit { category: String, unit: String },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "알 수 없는 카테고리: {c}"),
            ConversionError::UnknownUnit { category, unit } => {
                write!(f, "카테고리 {category} 에 없는 단위: {unit}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 카탈로그 배율을 이용해 같은 카테고리 안에서 값을 변환한다.
///
/// 기준 단위로 올린 뒤 목표 단위로 내리는 두 단계 합성이며, 반올림은 하지 않는다.
pub fn convert(
    catalog: &UnitCatalog,
    category: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = catalog.factor_of(category, from_unit)?;
    let to = catalog.factor_of(category, to_unit)?;
    if from_unit == to_unit {
        return Ok(value);
    }
    Ok(value * from / to)
}

/// 단위 이름 문자열을 온도 단위로 해석한다.
pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::from_name(s).ok_or_else(|| ConversionError::UnknownUnit {
        category: crate::units::TEMPERATURE_CATEGORY.to_string(),
        unit: s.to_string(),
    })
}

/// 현재 선택된 변환 방식. 비율 카테고리와 온도 두 가지뿐이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converter {
    Ratio {
        category: String,
        from: String,
        to: String,
    },
    Temperature {
        from: TemperatureUnit,
        to: TemperatureUnit,
    },
}

impl Converter {
    /// 변환기 종류별 기본 입력/출력 단위(첫 번째/두 번째 단위)로 구성한다.
    pub fn default_for(kind: QuantityKind, catalog: &UnitCatalog) -> Result<Self, ConversionError> {
        if !kind.is_ratio() {
            return Ok(Converter::Temperature {
                from: TemperatureUnit::ALL[0],
                to: TemperatureUnit::ALL[1],
            });
        }
        let name = kind.category_name();
        let (from, to) = catalog
            .category(name)
            .and_then(|c| c.default_pair())
            .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))?;
        Ok(Converter::Ratio {
            category: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// 카테고리 이름과 단위 이름 문자열로 변환기를 구성한다. 온도 카테고리도 받는다.
    pub fn from_names(
        catalog: &UnitCatalog,
        category: &str,
        from: &str,
        to: &str,
    ) -> Result<Self, ConversionError> {
        if category == crate::units::TEMPERATURE_CATEGORY {
            return Ok(Converter::Temperature {
                from: parse_temperature_unit(from)?,
                to: parse_temperature_unit(to)?,
            });
        }
        catalog.factor_of(category, from)?;
        catalog.factor_of(category, to)?;
        Ok(Converter::Ratio {
            category: category.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    pub fn category(&self) -> &str {
        match self {
            Converter::Ratio { category, .. } => category,
            Converter::Temperature { .. } => crate::units::TEMPERATURE_CATEGORY,
        }
    }

    pub fn apply(&self, catalog: &UnitCatalog, value: f64) -> Result<f64, ConversionError> {
        match self {
            Converter::Ratio { category, from, to } => convert(catalog, category, value, from, to),
            Converter::Temperature { from, to } => Ok(convert_temperature(value, *from, *to)),
        }
    }
}
