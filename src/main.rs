use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use piping_toolbox::{
    app::{self, AppError, Engine},
    config::{self, CONFIG_FILE},
    conversion::Converter,
    piping::{ThicknessField, ThicknessSession},
    session, ui_cli,
    units::{TemperatureUnit, TEMPERATURE_CATEGORY},
};

/// 배관 및 계장 계산 도구 (명령줄 버전)
#[derive(Debug, Parser)]
#[command(name = "piping_toolbox_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// 참조 데이터 JSON 경로 (설정 파일보다 우선)
    #[arg(long)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 단위 카테고리 목록
    Categories,
    /// 카테고리의 단위 목록
    Units { category: String },
    /// 비율 단위 환산
    Convert {
        category: String,
        from: String,
        to: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// 온도 환산 (Celsius, Fahrenheit, Kelvin)
    Temperature {
        from: String,
        to: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// 배관 최소 두께 계산. 생략한 값은 0 이다.
    Thickness {
        /// 설계 압력 P [MPa]
        #[arg(short = 'p', long, default_value = "", allow_hyphen_values = true)]
        pressure: String,
        /// 외경 D [mm]
        #[arg(short = 'd', long, default_value = "", allow_hyphen_values = true)]
        diameter: String,
        /// 허용 응력 S [MPa]
        #[arg(short = 's', long, default_value = "", allow_hyphen_values = true)]
        stress: String,
        /// 품질 계수 E
        #[arg(short = 'e', long, default_value = "", allow_hyphen_values = true)]
        quality: String,
        /// 용접 이음 계수 W
        #[arg(short = 'w', long, default_value = "", allow_hyphen_values = true)]
        weld: String,
        /// 계수 Y
        #[arg(short = 'y', long, default_value = "", allow_hyphen_values = true)]
        coeff: String,
        /// 부식 여유 C [mm]
        #[arg(short = 'c', long, default_value = "", allow_hyphen_values = true)]
        corrosion: String,
    },
    /// 참조 데이터 표 출력. 키를 생략하면 표 목록을 보여준다.
    Table { key: Option<String> },
    /// 현재 설정을 --config 경로에 기록 (--data 반영)
    SaveConfig,
    /// 대화형 메뉴 (기본값)
    Menu,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    piping_toolbox::logging::init("warn");
    match try_run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_from(&cli.config)?;
    if let Some(data) = cli.data {
        cfg.reference_data = Some(data);
    }
    let engine = Engine::from_config(&cfg);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Categories => {
            for name in engine.catalog.list_categories() {
                println!("{name}");
            }
            println!("{TEMPERATURE_CATEGORY}");
        }
        Command::Units { category } => {
            if category == TEMPERATURE_CATEGORY {
                for unit in TemperatureUnit::ALL {
                    println!("{unit}");
                }
            } else {
                for unit in engine.catalog.units_of(&category)? {
                    println!("{}\t{}", unit.name, unit.factor);
                }
            }
        }
        Command::Convert {
            category,
            from,
            to,
            value,
        } => {
            let converter = Converter::from_names(&engine.catalog, &category, &from, &to)?;
            println!("{}", session::render(&engine.catalog, &converter, &value)?);
        }
        Command::Temperature { from, to, value } => {
            let converter =
                Converter::from_names(&engine.catalog, TEMPERATURE_CATEGORY, &from, &to)?;
            println!("{}", session::render(&engine.catalog, &converter, &value)?);
        }
        Command::Thickness {
            pressure,
            diameter,
            stress,
            quality,
            weld,
            coeff,
            corrosion,
        } => {
            let texts = [
                pressure.as_str(),
                diameter.as_str(),
                stress.as_str(),
                quality.as_str(),
                weld.as_str(),
                coeff.as_str(),
                corrosion.as_str(),
            ];
            for (field, text) in ThicknessField::ALL.iter().zip(texts) {
                tracing::debug!(field = field.label(), text, "두께 입력");
            }
            let mut calc = ThicknessSession::new(cfg.thickness_decimals);
            println!("{}", calc.update(texts));
        }
        Command::Table { key: None } => {
            for key in engine.references.keys() {
                let rows = engine.references.get(key).map_or(0, |t| t.rows.len());
                println!("{key}\t{rows}");
            }
        }
        Command::Table { key: Some(key) } => {
            ui_cli::print_table(engine.references.require(&key)?);
        }
        Command::SaveConfig => {
            cfg.save_to(&cli.config)?;
            println!("설정 저장: {}", cli.config.display());
        }
        Command::Menu => app::run(&cfg, &engine)?,
    }
    Ok(())
}
