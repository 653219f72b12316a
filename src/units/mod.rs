//! 단위 카탈로그와 온도 단위 정의 모음.

pub mod catalog;
pub mod standard;
pub mod temperature;

pub use catalog::{CatalogError, UnitCatalog, UnitCategory, UnitEntry};
pub use temperature::{
    convert_temperature, from_celsius, to_celsius, TemperatureUnit, TEMPERATURE_CATEGORY,
};
