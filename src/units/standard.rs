//! 기본 단위 배율 표. 단위 이름은 화면 라벨과 조회 키를 겸하므로 여기서만 정의한다.

/// (카테고리 이름, [(단위 이름, 기준 단위 대비 배율)])
pub(crate) type CategoryTable = (&'static str, &'static [(&'static str, f64)]);

pub const LENGTH: &str = "길이";
pub const AREA: &str = "넓이";
pub const VOLUME: &str = "부피";
pub const WEIGHT: &str = "무게";
pub const PRESSURE: &str = "압력";
pub const DYNAMIC_VISCOSITY: &str = "동적 유속";
pub const KINEMATIC_VISCOSITY: &str = "정적 유속";
pub const VOLUMETRIC_FLOW: &str = "부피 유량";
pub const MASS_FLOW: &str = "질량 유량";

pub(crate) const STANDARD_CATEGORIES: &[CategoryTable] = &[
    // 기준: m
    (
        LENGTH,
        &[
            ("Millimeter", 0.001),
            ("Centimeter", 0.01),
            ("Meter", 1.0),
            ("Kilometer", 1000.0),
            ("Inch", 0.0254),
            ("Foot", 0.3048),
            ("Yard", 0.9144),
            ("Mile", 1609.344),
        ],
    ),
    // 기준: m²
    (
        AREA,
        &[
            ("mm²", 1e-6),
            ("cm²", 0.0001),
            ("m²", 1.0),
            ("km²", 1e6),
            ("in²", 0.00064516),
            ("ft²", 0.09290304),
            ("yd²", 0.83612736),
            ("mi²", 2589988.110336),
        ],
    ),
    // 기준: m³
    (
        VOLUME,
        &[
            ("Milliliter", 1e-6),
            ("Liter", 0.001),
            ("m³", 1.0),
            ("mm³", 1e-9),
            ("cm³", 1e-6),
            ("Barrel(oil)", 0.1589872949),
            ("CC", 1e-6),
            ("in³", 0.0000163871),
            ("ft³", 0.0283168466),
            ("yd³", 0.764554858),
            ("US Gallon", 0.0037854118),
        ],
    ),
    // 기준: kg
    (
        WEIGHT,
        &[
            ("Milligram", 1e-6),
            ("Gram", 0.001),
            ("Kilogram", 1.0),
            ("Ton", 1000.0),
            ("Ounce", 0.0283495231),
            ("Pound", 0.45359237),
        ],
    ),
    // 기준: MPa
    (
        PRESSURE,
        &[
            ("Kilopascal", 0.001),
            ("bar", 0.1),
            ("Megapascal", 1.0),
            ("psi", 0.0068947573),
            ("Standard Atmosphere", 0.101325),
            ("Newton/m²", 1e-6),
            ("Newton/cm²", 0.01),
            ("Newton/mm²", 1.0),
            ("kgf/m²", 0.00000980665),
            ("kgf/cm²", 0.0980665),
            ("kgf/mm²", 9.80665),
            ("Torr", 0.0001333224),
        ],
    ),
    // 기준: mPa·s
    (
        DYNAMIC_VISCOSITY,
        &[("mN·s/m²", 1.0), ("Centipoise", 1.0), ("mPa·s", 1.0)],
    ),
    // 기준: mm²/s
    (KINEMATIC_VISCOSITY, &[("mm²/s", 1.0), ("Centistokes", 1.0)]),
    // 기준: m³/hr
    (
        VOLUMETRIC_FLOW,
        &[
            ("cm³/s", 0.0036),
            ("cm³/min", 0.00006),
            ("cm³/hr", 1e-6),
            ("m³/s", 3600.0),
            ("m³/min", 60.0),
            ("m³/hr", 1.0),
            ("L/s", 3.6),
            ("L/min", 0.06),
            ("L/hr", 0.001),
            ("gal(US)/s", 13.627482),
            ("gal(US)/min", 0.227124),
            ("gal(US)/hr", 0.003785),
            ("barrel/s", 572.35426),
            ("barrel/min", 9.539237),
            ("barrel/hr", 0.158987),
        ],
    ),
    // 기준: kg/hr
    (
        MASS_FLOW,
        &[
            ("g/s", 3.6),
            ("g/min", 0.06),
            ("g/hr", 0.001),
            ("kg/s", 3600.0),
            ("kg/min", 60.0),
            ("kg/hr", 1.0),
            ("lb/s", 1632.9325),
            ("lb/min", 27.21554),
            ("lb/hr", 0.453592),
        ],
    ),
];
