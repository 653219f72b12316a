use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 단위 하나와 기준 단위 대비 배율.
///
/// `factor` 는 이 단위 1 을 카테고리 기준 단위로 환산할 때 곱하는 값이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub name: String,
    pub factor: f64,
}

impl UnitEntry {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
        }
    }
}

/// 비율 변환 카테고리. 단위 순서가 기본 입력/출력 단위를 결정한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCategory {
    pub name: String,
    pub units: Vec<UnitEntry>,
}

impl UnitCategory {
    pub fn new(name: impl Into<String>, units: Vec<UnitEntry>) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    pub fn unit(&self, name: &str) -> Option<&UnitEntry> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.name.as_str())
    }

    /// 기본 입력 단위(첫 번째)와 기본 출력 단위(두 번째, 없으면 첫 번째)를 반환한다.
    pub fn default_pair(&self) -> Option<(&str, &str)> {
        let first = self.units.first()?;
        let second = self.units.get(1).unwrap_or(first);
        Some((first.name.as_str(), second.name.as_str()))
    }
}

/// 카탈로그 구성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// 단위가 하나도 없는 카테고리
    EmptyCategory(String),
    /// 같은 이름의 카테고리가 두 번 등장
    DuplicateCategory(String),
    /// 카테고리 안에서 단위 이름이 중복
    DuplicateUnit { category: String, unit: String },
    /// 0 이하이거나 유한하지 않은 배율
    InvalidFactor {
        category: String,
        unit: String,
        factor: f64,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyCategory(c) => write!(f, "단위가 없는 카테고리: {c}"),
            CatalogError::DuplicateCategory(c) => write!(f, "중복된 카테고리: {c}"),
            CatalogError::DuplicateUnit { category, unit } => {
                write!(f, "카테고리 {category} 에 중복된 단위: {unit}")
            }
            CatalogError::InvalidFactor {
                category,
                unit,
                factor,
            } => write!(f, "카테고리 {category} 의 단위 {unit} 배율이 잘못됨: {factor}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// 이름이 붙은 비율 카테고리들의 불변 모음.
///
/// 한 번 만들어진 뒤에는 읽기 전용이며, 여러 화면에서 참조로 공유해도 된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCatalog {
    categories: Vec<UnitCategory>,
}

impl UnitCatalog {
    /// 카테고리 목록을 검증한 뒤 카탈로그를 만든다.
    pub fn new(categories: Vec<UnitCategory>) -> Result<Self, CatalogError> {
        for (i, cat) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == cat.name) {
                return Err(CatalogError::DuplicateCategory(cat.name.clone()));
            }
            if cat.units.is_empty() {
                return Err(CatalogError::EmptyCategory(cat.name.clone()));
            }
            for (j, unit) in cat.units.iter().enumerate() {
                if !(unit.factor.is_finite() && unit.factor > 0.0) {
                    return Err(CatalogError::InvalidFactor {
                        category: cat.name.clone(),
                        unit: unit.name.clone(),
                        factor: unit.factor,
                    });
                }
                if cat.units[..j].iter().any(|u| u.name == unit.name) {
                    return Err(CatalogError::DuplicateUnit {
                        category: cat.name.clone(),
                        unit: unit.name.clone(),
                    });
                }
            }
        }
        Ok(Self { categories })
    }

    /// 기본 제공 9개 카테고리(길이, 넓이, 부피, 무게, 압력, 점도 2종, 유량 2종)로 구성한다.
    pub fn standard() -> Self {
        let categories = super::standard::STANDARD_CATEGORIES
            .iter()
            .map(|(name, units)| {
                UnitCategory::new(
                    *name,
                    units
                        .iter()
                        .map(|(unit, factor)| UnitEntry::new(*unit, *factor))
                        .collect(),
                )
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[UnitCategory] {
        &self.categories
    }

    /// 카테고리 이름을 등록 순서대로 반환한다.
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&UnitCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    fn require(&self, category: &str) -> Result<&UnitCategory, ConversionError> {
        self.category(category)
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))
    }

    /// 카테고리에 속한 단위를 순서대로 반환한다.
    pub fn units_of(&self, category: &str) -> Result<&[UnitEntry], ConversionError> {
        Ok(&self.require(category)?.units)
    }

    /// 단위의 기준 단위 대비 배율을 조회한다.
    pub fn factor_of(&self, category: &str, unit: &str) -> Result<f64, ConversionError> {
        let cat = self.require(category)?;
        cat.unit(unit)
            .map(|u| u.factor)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: category.to_string(),
                unit: unit.to_string(),
            })
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
