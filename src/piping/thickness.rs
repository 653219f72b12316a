use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::session::DisplayValue;

/// 두께 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ThicknessError {
    /// 입력 칸의 문자열이 숫자가 아님
    Parse { field: ThicknessField, text: String },
    /// 분모 2(SEW + PY) 가 0 이하라 의미 있는 두께가 없음
    DegenerateInput { denominator: f64 },
}

impl std::fmt::Display for ThicknessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThicknessError::Parse { field, text } => {
                write!(f, "{} 입력이 숫자가 아님: {text:?}", field.label())
            }
            ThicknessError::DegenerateInput { denominator } => {
                write!(f, "분모가 0 이하입니다: 2(SEW + PY) = {denominator}")
            }
        }
    }
}

impl std::error::Error for ThicknessError {}

/// 두께 계산 입력 칸. 순서는 화면 표시 순서와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThicknessField {
    Pressure,
    OutsideDiameter,
    AllowableStress,
    QualityFactor,
    WeldJointFactor,
    Coefficient,
    CorrosionAllowance,
}

impl ThicknessField {
    pub const ALL: [ThicknessField; 7] = [
        ThicknessField::Pressure,
        ThicknessField::OutsideDiameter,
        ThicknessField::AllowableStress,
        ThicknessField::QualityFactor,
        ThicknessField::WeldJointFactor,
        ThicknessField::Coefficient,
        ThicknessField::CorrosionAllowance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThicknessField::Pressure => "Design Pressure (P)",
            ThicknessField::OutsideDiameter => "Outside Diameter (D)",
            ThicknessField::AllowableStress => "Allowable Stress (S)",
            ThicknessField::QualityFactor => "Quality Factor (E)",
            ThicknessField::WeldJointFactor => "Weld Joint Factor (W)",
            ThicknessField::Coefficient => "Coefficient (Y)",
            ThicknessField::CorrosionAllowance => "Corrosion (C)",
        }
    }

    /// 공식에 쓰이는 기호.
    pub fn symbol(self) -> char {
        match self {
            ThicknessField::Pressure => 'P',
            ThicknessField::OutsideDiameter => 'D',
            ThicknessField::AllowableStress => 'S',
            ThicknessField::QualityFactor => 'E',
            ThicknessField::WeldJointFactor => 'W',
            ThicknessField::Coefficient => 'Y',
            ThicknessField::CorrosionAllowance => 'C',
        }
    }

    /// 표시 단위. 무차원 계수는 빈 문자열이다.
    pub fn unit(self) -> &'static str {
        match self {
            ThicknessField::Pressure | ThicknessField::AllowableStress => "MPa",
            ThicknessField::OutsideDiameter | ThicknessField::CorrosionAllowance => "mm",
            _ => "",
        }
    }
}

/// 최소 두께 공식 입력값. 빈 칸은 0 으로 취급한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThicknessInputs {
    /// 설계 압력 P [MPa]
    pub pressure: f64,
    /// 외경 D [mm]
    pub outside_diameter: f64,
    /// 허용 응력 S [MPa]
    pub allowable_stress: f64,
    /// 품질 계수 E
    pub quality_factor: f64,
    /// 용접 이음 강도 감소 계수 W
    pub weld_joint_factor: f64,
    /// 계수 Y
    pub coefficient: f64,
    /// 부식 여유 C [mm]
    pub corrosion_allowance: f64,
}

impl ThicknessInputs {
    /// `ThicknessField::ALL` 순서의 값 배열로 구성한다.
    pub fn from_values(values: [f64; 7]) -> Self {
        let [pressure, outside_diameter, allowable_stress, quality_factor, weld_joint_factor, coefficient, corrosion_allowance] =
            values;
        Self {
            pressure,
            outside_diameter,
            allowable_stress,
            quality_factor,
            weld_joint_factor,
            coefficient,
            corrosion_allowance,
        }
    }

    /// 입력 칸 문자열 7개를 해석한다. 빈 문자열은 0, 해석 불가한 칸은 오류이다.
    pub fn from_texts(texts: [&str; 7]) -> Result<Self, ThicknessError> {
        let mut values = [0.0; 7];
        for ((slot, text), field) in values.iter_mut().zip(texts).zip(ThicknessField::ALL) {
            if text.is_empty() {
                continue;
            }
            *slot = text
                .trim()
                .parse::<f64>()
                .map_err(|_| ThicknessError::Parse {
                    field,
                    text: text.to_string(),
                })?;
        }
        Ok(Self::from_values(values))
    }

    pub fn get(&self, field: ThicknessField) -> f64 {
        match field {
            ThicknessField::Pressure => self.pressure,
            ThicknessField::OutsideDiameter => self.outside_diameter,
            ThicknessField::AllowableStress => self.allowable_stress,
            ThicknessField::QualityFactor => self.quality_factor,
            ThicknessField::WeldJointFactor => self.weld_joint_factor,
            ThicknessField::Coefficient => self.coefficient,
            ThicknessField::CorrosionAllowance => self.corrosion_allowance,
        }
    }
}

/// 압력 설계 두께에 부식 여유를 더한 최소 요구 두께를 계산한다.
///
/// t = (P·D) / (2(S·E·W + P·Y)) + C
///
/// 분모가 0 이하이면 `DegenerateInput` 을 반환한다. NaN 분모는 비교에 걸리지 않으므로
/// 결과도 NaN 이 된다. 괄호 묶음은 기준값과 비트 단위로 일치하도록 그대로 유지한다.
pub fn compute_min_thickness(inputs: &ThicknessInputs) -> Result<f64, ThicknessError> {
    let ThicknessInputs {
        pressure: p,
        outside_diameter: d,
        allowable_stress: s,
        quality_factor: e,
        weld_joint_factor: w,
        coefficient: y,
        corrosion_allowance: c,
    } = *inputs;

    let denominator = 2.0 * (s * e * w + p * y);
    if denominator <= 0.0 {
        return Err(ThicknessError::DegenerateInput { denominator });
    }
    Ok((p * d) / denominator + c)
}

/// 두께 계산 화면의 결과 표시 상태.
///
/// 분모가 0 이하인 입력은 이전 결과를 그대로 남기고, 숫자가 아닌 입력은 "-" 를 표시한다.
#[derive(Debug, Clone)]
pub struct ThicknessSession {
    decimals: usize,
    last: DisplayValue,
}

impl ThicknessSession {
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            last: DisplayValue::Placeholder,
        }
    }

    pub fn display(&self) -> &DisplayValue {
        &self.last
    }

    /// 입력 칸 문자열로 다시 계산하고 표시값을 돌려준다.
    pub fn update(&mut self, texts: [&str; 7]) -> &DisplayValue {
        match ThicknessInputs::from_texts(texts).and_then(|i| compute_min_thickness(&i)) {
            Ok(t) => {
                self.last = DisplayValue::Formatted(format!("{t:.prec$} mm", prec = self.decimals));
            }
            Err(ThicknessError::Parse { field, text }) => {
                debug!(field = field.label(), %text, "두께 입력 해석 실패");
                self.last = DisplayValue::Placeholder;
            }
            Err(ThicknessError::DegenerateInput { denominator }) => {
                debug!(denominator, "분모가 0 이하라 이전 결과 유지");
            }
        }
        &self.last
    }
}

impl Default for ThicknessSession {
    fn default() -> Self {
        Self::new(4)
    }
}
