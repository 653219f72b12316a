use serde::{Deserialize, Serialize};

use crate::units::standard::{
    AREA, DYNAMIC_VISCOSITY, KINEMATIC_VISCOSITY, LENGTH, MASS_FLOW, PRESSURE, VOLUME,
    VOLUMETRIC_FLOW, WEIGHT,
};
use crate::units::TEMPERATURE_CATEGORY;

/// 화면에 표시되는 변환기 종류. 표시 순서는 `ALL` 의 순서를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Length,
    Area,
    Volume,
    Weight,
    Pressure,
    DynamicViscosity,
    KinematicViscosity,
    VolumetricFlow,
    MassFlow,
    Temperature,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 10] = [
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Weight,
        QuantityKind::Pressure,
        QuantityKind::DynamicViscosity,
        QuantityKind::KinematicViscosity,
        QuantityKind::VolumetricFlow,
        QuantityKind::MassFlow,
        QuantityKind::Temperature,
    ];

    pub fn all() -> &'static [QuantityKind] {
        &Self::ALL
    }

    /// 카탈로그 조회 키이자 화면 제목.
    pub fn category_name(self) -> &'static str {
        match self {
            QuantityKind::Length => LENGTH,
            QuantityKind::Area => AREA,
            QuantityKind::Volume => VOLUME,
            QuantityKind::Weight => WEIGHT,
            QuantityKind::Pressure => PRESSURE,
            QuantityKind::DynamicViscosity => DYNAMIC_VISCOSITY,
            QuantityKind::KinematicViscosity => KINEMATIC_VISCOSITY,
            QuantityKind::VolumetricFlow => VOLUMETRIC_FLOW,
            QuantityKind::MassFlow => MASS_FLOW,
            QuantityKind::Temperature => TEMPERATURE_CATEGORY,
        }
    }

    /// 단순 배율로 변환되는 종류인지 여부. 온도만 오프셋 변환이다.
    pub fn is_ratio(self) -> bool {
        !matches!(self, QuantityKind::Temperature)
    }

    pub fn from_category_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.category_name() == name)
    }
}
