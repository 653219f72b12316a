use std::io::{self, Write};
use std::sync::Arc;

use crate::app::{AppError, Engine};
use crate::config::Config;
use crate::conversion::{parse_temperature_unit, Converter};
use crate::piping::{ReferenceKind, ReferenceTable, ThicknessField, ThicknessSession};
use crate::session::ConversionSession;
use crate::units::{TemperatureUnit, TEMPERATURE_CATEGORY};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Temperature,
    Thickness,
    ReferenceTables,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== 배관 및 계장 계산 도구 ===");
    println!("1) 단위 환산");
    println!("2) 온도 환산");
    println!("3) 배관 두께 계산");
    println!("4) 참조 데이터");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Temperature),
            "3" => return Ok(MenuChoice::Thickness),
            "4" => return Ok(MenuChoice::ReferenceTables),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 비율 단위 환산 메뉴를 처리한다.
pub fn handle_unit_conversion(engine: &Engine) -> Result<(), AppError> {
    println!("\n-- 단위 환산 --");
    let names = engine.catalog.list_categories();
    let category = select_from("카테고리 번호: ", &names)?;
    let units: Vec<&str> = engine
        .catalog
        .units_of(category)?
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    let from = select_from("입력 단위 번호: ", &units)?;
    let to = select_from("변환 단위 번호: ", &units)?;
    let converter = Converter::from_names(&engine.catalog, category, from, to)?;
    let conv = ConversionSession::new(Arc::clone(&engine.catalog), converter);
    let raw = read_line("값 입력: ")?;
    let shown = conv.parse_and_format(raw.trim_end_matches(['\r', '\n']))?;
    println!("변환 결과: {shown} {to}");
    Ok(())
}

/// 온도 환산 메뉴를 처리한다.
pub fn handle_temperature(engine: &Engine) -> Result<(), AppError> {
    println!("\n-- {TEMPERATURE_CATEGORY} --");
    let names: Vec<&str> = TemperatureUnit::ALL.iter().map(|u| u.name()).collect();
    let from = select_from("입력 단위 번호: ", &names)?;
    let to = select_from("변환 단위 번호: ", &names)?;
    let converter = Converter::Temperature {
        from: parse_temperature_unit(from)?,
        to: parse_temperature_unit(to)?,
    };
    let conv = ConversionSession::new(Arc::clone(&engine.catalog), converter);
    let raw = read_line("값 입력: ")?;
    let shown = conv.parse_and_format(raw.trim_end_matches(['\r', '\n']))?;
    println!("변환 결과: {shown} {to}");
    Ok(())
}

/// 배관 최소 두께 계산 메뉴를 처리한다. 빈 입력은 0 으로 계산한다.
pub fn handle_thickness(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 배관 두께 계산 --");
    println!("t = P·D / 2(S·E·W + P·Y) + C  (빈 칸은 0)");
    let mut texts: Vec<String> = Vec::with_capacity(ThicknessField::ALL.len());
    for field in ThicknessField::ALL {
        let prompt = if field.unit().is_empty() {
            format!("{}: ", field.label())
        } else {
            format!("{} [{}]: ", field.label(), field.unit())
        };
        texts.push(read_line(&prompt)?.trim_end_matches(['\r', '\n']).to_string());
    }
    let texts: [&str; 7] = std::array::from_fn(|i| texts[i].as_str());
    let mut calc = ThicknessSession::new(cfg.thickness_decimals);
    println!("최소 요구 두께 (t): {}", calc.update(texts));
    Ok(())
}

/// 참조 데이터 표 메뉴를 처리한다.
pub fn handle_reference_tables(engine: &Engine) -> Result<(), AppError> {
    println!("\n-- 참조 데이터 --");
    let labels: Vec<&str> = ReferenceKind::ALL.iter().map(|k| k.label()).collect();
    let label = select_from("표 번호: ", &labels)?;
    if let Some(kind) = ReferenceKind::ALL.into_iter().find(|k| k.label() == label) {
        print_table(engine.references.table(kind));
    }
    Ok(())
}

/// 표를 열 너비를 맞춰 출력한다. 첫 행 아래에 구분선을 긋는다.
pub fn print_table(table: &ReferenceTable) {
    if table.is_empty() {
        println!("(데이터 없음)");
        return;
    }
    let mut widths = vec![0usize; table.column_count()];
    for row in &table.rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    for (i, row) in table.rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        println!("{}", line.join(" | "));
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            println!("{}", rule.join("-+-"));
        }
    }
}

fn select_from<'a>(prompt: &str, options: &[&'a str]) -> Result<&'a str, AppError> {
    for (i, opt) in options.iter().enumerate() {
        println!("{:>2}) {opt}", i + 1);
    }
    loop {
        let sel = read_line(prompt)?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some(opt) = n.checked_sub(1).and_then(|i| options.get(i)) {
                return Ok(*opt);
            }
        }
        println!("지원하지 않는 번호입니다.");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
