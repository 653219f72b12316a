//! 배관 두께 계산과 참조 데이터 표 모음.

pub mod reference;
pub mod thickness;

pub use reference::{
    resource_path, ReferenceError, ReferenceKind, ReferenceTable, ReferenceTableStore,
    DEFAULT_REFERENCE_FILE,
};
pub use thickness::{
    compute_min_thickness, ThicknessError, ThicknessField, ThicknessInputs, ThicknessSession,
};
