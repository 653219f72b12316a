//! 허용응력, 주조 품질, 용접 이음, 계수 Y 참조 표.
//!
//! 표는 시작 시 JSON 파일에서 한 번만 읽고 이후에는 읽기 전용이다. 파일이 없거나
//! 읽을 수 없으면 다섯 개의 표 모두 빈 표로 대체하며 오류를 올리지 않는다.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// 실행 파일 옆(또는 현재 폴더)에서 찾는 기본 참조 데이터 파일 이름.
pub const DEFAULT_REFERENCE_FILE: &str = "piping_data.json";

/// 인식하는 참조 표 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Stress,
    Casting,
    LongitudinalWeld,
    Weld,
    Coefficient,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 5] = [
        ReferenceKind::Stress,
        ReferenceKind::Casting,
        ReferenceKind::LongitudinalWeld,
        ReferenceKind::Weld,
        ReferenceKind::Coefficient,
    ];

    /// JSON 문서의 키.
    pub fn key(self) -> &'static str {
        match self {
            ReferenceKind::Stress => "stress_data",
            ReferenceKind::Casting => "casting_data",
            ReferenceKind::LongitudinalWeld => "longitu_data",
            ReferenceKind::Weld => "weld_data",
            ReferenceKind::Coefficient => "coefficient_data",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferenceKind::Stress => "Allowable Stress (S)",
            ReferenceKind::Casting => "Casting Quality (Ec)",
            ReferenceKind::LongitudinalWeld => "Longitudinal Weld Joints (Ej)",
            ReferenceKind::Weld => "Weld Joint (W)",
            ReferenceKind::Coefficient => "Coefficient (Y)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// 문자열 셀로 이루어진 표. 첫 행은 머리글이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub key: String,
    pub rows: Vec<Vec<String>>,
}

static EMPTY_TABLE: ReferenceTable = ReferenceTable {
    key: String::new(),
    rows: Vec::new(),
};

impl ReferenceTable {
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// 머리글을 제외한 데이터 행.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// 가장 긴 행의 셀 개수.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// 참조 데이터 로드 시 발생 가능한 오류. `load` 는 이를 로그로만 남긴다.
#[derive(Debug)]
pub enum ReferenceError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 파싱 오류
    Json(serde_json::Error),
    /// 문서 구조가 키 → 행 배열 형태가 아님
    InvalidShape { key: String, reason: &'static str },
    /// 저장소에 없는 표 키
    UnknownKey(String),
}

impl std::fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ReferenceError::Json(e) => write!(f, "JSON 파싱 오류: {e}"),
            ReferenceError::InvalidShape { key, reason } => {
                write!(f, "참조 데이터 {key} 형식 오류: {reason}")
            }
            ReferenceError::UnknownKey(key) => write!(f, "알 수 없는 참조 표: {key}"),
        }
    }
}

impl std::error::Error for ReferenceError {}

impl From<std::io::Error> for ReferenceError {
    fn from(value: std::io::Error) -> Self {
        ReferenceError::Io(value)
    }
}

impl From<serde_json::Error> for ReferenceError {
    fn from(value: serde_json::Error) -> Self {
        ReferenceError::Json(value)
    }
}

/// 키로 조회하는 참조 표 모음. 인식하는 다섯 개의 키는 항상 존재한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTableStore {
    tables: BTreeMap<String, ReferenceTable>,
}

impl ReferenceTableStore {
    /// 다섯 개의 표가 모두 비어 있는 저장소.
    pub fn empty() -> Self {
        let tables = ReferenceKind::ALL
            .into_iter()
            .map(|k| (k.key().to_string(), ReferenceTable::empty(k.key())))
            .collect();
        Self { tables }
    }

    /// 파일에서 표를 읽는다. 파일이 없거나 읽기에 실패하면 빈 표로 대체한다.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "참조 데이터 로드 실패, 빈 표 사용");
                Self::empty()
            }
        }
    }

    /// 파일에서 표를 읽는다. 파일이 없으면 빈 표이고, 그 밖의 실패는 오류로 반환한다.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "참조 데이터 파일 없음, 빈 표 사용");
            return Ok(Self::empty());
        }
        let content = fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            tables = store.tables.len(),
            "참조 데이터 로드 완료"
        );
        Ok(store)
    }

    /// `{ "키": [[셀, ...], ...], ... }` 형태의 JSON 문서를 해석한다.
    pub fn from_json_str(content: &str) -> Result<Self, ReferenceError> {
        let doc: serde_json::Map<String, Value> = serde_json::from_str(content)?;
        let mut store = Self::empty();
        for (key, value) in doc {
            let rows = parse_rows(&key, value)?;
            store
                .tables
                .insert(key.clone(), ReferenceTable { key, rows });
        }
        Ok(store)
    }

    /// 종류별 표. 파일에 없던 키는 빈 표이다.
    pub fn table(&self, kind: ReferenceKind) -> &ReferenceTable {
        self.get(kind.key()).unwrap_or(&EMPTY_TABLE)
    }

    pub fn get(&self, key: &str) -> Option<&ReferenceTable> {
        self.tables.get(key)
    }

    /// 키로 표를 찾되, 없으면 `UnknownKey` 오류를 반환한다.
    pub fn require(&self, key: &str) -> Result<&ReferenceTable, ReferenceError> {
        self.get(key)
            .ok_or_else(|| ReferenceError::UnknownKey(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl Default for ReferenceTableStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn parse_rows(key: &str, value: Value) -> Result<Vec<Vec<String>>, ReferenceError> {
    let Value::Array(rows) = value else {
        return Err(ReferenceError::InvalidShape {
            key: key.to_string(),
            reason: "값이 행 배열이 아닙니다",
        });
    };
    rows.into_iter()
        .map(|row| match row {
            Value::Array(cells) => Ok(cells.into_iter().map(cell_text).collect()),
            _ => Err(ReferenceError::InvalidShape {
                key: key.to_string(),
                reason: "행이 셀 배열이 아닙니다",
            }),
        })
        .collect()
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 실행 파일이 있는 폴더 기준으로 리소스 경로를 찾는다.
///
/// 실행 파일 옆에 파일이 없으면 현재 작업 폴더 기준 경로를 돌려준다.
pub fn resource_path(relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(relative)));
    if let Some(candidate) = beside_exe {
        if candidate.exists() {
            return candidate;
        }
    }
    std::env::current_dir()
        .map(|dir| dir.join(relative))
        .unwrap_or_else(|_| relative.to_path_buf())
}
