use std::sync::Arc;

use crate::config::Config;
use crate::conversion;
use crate::piping::{ReferenceError, ReferenceTableStore};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::units::{CatalogError, UnitCatalog};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 카탈로그 구성 오류
    Catalog(CatalogError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 참조 데이터 오류
    Reference(ReferenceError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Catalog(e) => write!(f, "단위 카탈로그 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Reference(e) => write!(f, "참조 데이터 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<ReferenceError> for AppError {
    fn from(value: ReferenceError) -> Self {
        AppError::Reference(value)
    }
}

/// 계산 엔진이 참조하는 불변 데이터 묶음. 시작 시 한 번 만든다.
///
/// 카탈로그는 변환 세션들이 함께 들고 있도록 `Arc` 로 공유한다.
#[derive(Debug, Clone)]
pub struct Engine {
    pub catalog: Arc<UnitCatalog>,
    pub references: ReferenceTableStore,
}

impl Engine {
    /// 표준 카탈로그와 설정이 가리키는 참조 데이터로 구성한다.
    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog: Arc::new(UnitCatalog::standard()),
            references: ReferenceTableStore::load(config.reference_path()),
        }
    }
}

/// CLI 대화형 메뉴의 메인 루프를 실행한다.
pub fn run(config: &Config, engine: &Engine) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(engine)?,
            MenuChoice::Temperature => ui_cli::handle_temperature(engine)?,
            MenuChoice::Thickness => ui_cli::handle_thickness(config)?,
            MenuChoice::ReferenceTables => ui_cli::handle_reference_tables(engine)?,
            MenuChoice::Exit => {
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
