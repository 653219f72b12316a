use serde::{Deserialize, Serialize};

/// 온도 변환기의 표시 이름. 비율 카탈로그에는 포함되지 않는다.
pub const TEMPERATURE_CATEGORY: &str = "온도";

/// 온도 단위. 오프셋이 있는 변환이므로 비율 표가 아닌 공식으로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// 표시 순서대로 나열한 전체 단위. 첫 항목이 기본 입력, 두 번째가 기본 출력 단위이다.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// 화면 라벨이자 조회 키로 쓰이는 단위 이름.
    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// 단위 이름으로부터 enum 을 찾는다. 이름은 정확히 일치해야 한다.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.name() == name)
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    }
}

/// 온도를 서로 다른 단위로 변환한다. 섭씨를 기준점으로 거친다.
///
/// 절대 영도 미만 값도 그대로 계산한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    // 같은 단위끼리는 왕복 반올림 오차 없이 입력값을 그대로 돌려준다.
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}
