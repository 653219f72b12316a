#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use std::{fs, path::Path, path::PathBuf, sync::Arc};
use tracing::{error, info, warn};

use piping_toolbox::{
    app::Engine,
    config,
    piping::{ReferenceKind, ThicknessField, ThicknessSession},
    quantity::QuantityKind,
    session::{ConversionSession, DisplayValue},
    units::UnitCatalog,
};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xd3, 0x54, 0x00);
const HEADER_BG: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);

fn main() -> Result<(), eframe::Error> {
    piping_toolbox::logging::init("info");

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(error = %e, "설정 로드 실패, 기본값 사용");
        config::Config::default()
    });
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("배관 및 계장 계산 도구 - 베타")
            .with_inner_size([1050.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Piping Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("Font error: {e}");
            }
            cc.egui_ctx.set_visuals(if app_cfg.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Box::new(GuiApp::new(&app_cfg))
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 카테고리 이름을 표시하기 위해 시스템 한글 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows/macOS/Linux 시스템 폰트
/// 3) 모두 실패하면 기본 폰트를 유지하고 Err 를 반환한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::from("assets/fonts/malgun.ttf")];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    for cand in [
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ] {
        candidates.push(PathBuf::from(cand));
    }

    for path in candidates.iter().filter(|p| p.exists()) {
        let bytes = fs::read(path)
            .map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        info!(font = %path.display(), "한글 폰트 적용");
        return Ok(());
    }
    Err("Korean font not found; category titles may not render.".into())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Units,
    Thickness,
}

/// 변환기 한 줄의 입력/결과 상태. 단위 선택은 세션이 들고 있다.
struct ConverterRow {
    kind: QuantityKind,
    input: String,
    session: ConversionSession,
    output: DisplayValue,
}

impl ConverterRow {
    fn new(kind: QuantityKind, catalog: &Arc<UnitCatalog>) -> Option<Self> {
        let session = match ConversionSession::for_kind(Arc::clone(catalog), kind) {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "변환기 기본 단위 구성 실패");
                return None;
            }
        };
        // 온도는 0도부터 시작하는 것이 자연스럽다.
        let input = if kind.is_ratio() { "1" } else { "0" };
        let mut row = Self {
            kind,
            input: input.to_string(),
            session,
            output: DisplayValue::Placeholder,
        };
        row.recompute();
        Some(row)
    }

    fn recompute(&mut self) {
        self.output = match self.session.parse_and_format(&self.input) {
            Ok(v) => v,
            Err(e) => {
                error!(error = %e, kind = ?self.kind, "변환 실패");
                DisplayValue::Placeholder
            }
        };
    }
}

struct GuiApp {
    engine: Engine,
    tab: Tab,
    rows: Vec<ConverterRow>,
    thickness_texts: [String; 7],
    thickness: ThicknessSession,
    reference_kind: ReferenceKind,
}

impl GuiApp {
    fn new(cfg: &config::Config) -> Self {
        let engine = Engine::from_config(cfg);
        let rows = QuantityKind::all()
            .iter()
            .filter_map(|k| ConverterRow::new(*k, &engine.catalog))
            .collect();
        Self {
            engine,
            tab: Tab::Units,
            rows,
            thickness_texts: Default::default(),
            thickness: ThicknessSession::new(cfg.thickness_decimals),
            reference_kind: ReferenceKind::Stress,
        }
    }

    fn ui_units(&mut self, ui: &mut egui::Ui) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add_sized(
                        [80.0, 20.0],
                        egui::Label::new(egui::RichText::new(row.kind.category_name()).strong()),
                    );
                    let mut changed = ui
                        .add_sized([210.0, 20.0], egui::TextEdit::singleline(&mut row.input))
                        .changed();
                    changed |= unit_selector(ui, ("from", i), &mut row.session, true);
                    ui.label(egui::RichText::new("▶").color(egui::Color32::GRAY));
                    ui.add_sized(
                        [240.0, 20.0],
                        egui::Label::new(
                            egui::RichText::new(row.output.as_str())
                                .strong()
                                .color(ACCENT),
                        )
                        .selectable(true),
                    );
                    changed |= unit_selector(ui, ("to", i), &mut row.session, false);
                    if changed {
                        row.recompute();
                    }
                });
            });
        }
    }

    fn ui_thickness(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |cols| {
            self.ui_thickness_inputs(&mut cols[0]);
            self.ui_reference(&mut cols[1]);
        });
    }

    fn ui_thickness_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Pipe Thickness Calculation")
                    .size(18.0)
                    .strong()
                    .color(ACCENT),
            );
            ui.add_space(10.0);
            let mut changed = false;
            egui::Grid::new("thickness_grid")
                .num_columns(3)
                .spacing([25.0, 18.0])
                .show(ui, |ui| {
                    for (field, text) in ThicknessField::ALL.iter().zip(&mut self.thickness_texts) {
                        ui.label(field.label());
                        changed |= ui.text_edit_singleline(text).changed();
                        ui.label(field.unit());
                        ui.end_row();
                    }
                });
            if changed {
                let texts: [&str; 7] = std::array::from_fn(|i| self.thickness_texts[i].as_str());
                self.thickness.update(texts);
            }
            ui.add_space(20.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Required Min. Thickness (t):").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.thickness.display().as_str())
                            .size(16.0)
                            .strong()
                            .color(ACCENT),
                    );
                });
            });
        });
    }

    fn ui_reference(&mut self, ui: &mut egui::Ui) {
        ui.label("Reference Data Selection:");
        egui::ComboBox::from_id_source("reference_kind")
            .selected_text(self.reference_kind.label())
            .width(260.0)
            .show_ui(ui, |ui| {
                for kind in ReferenceKind::ALL {
                    ui.selectable_value(&mut self.reference_kind, kind, kind.label());
                }
            });
        ui.add_space(8.0);

        let table = self.engine.references.table(self.reference_kind);
        if table.is_empty() {
            ui.label(egui::RichText::new("(데이터 없음)").italics());
            return;
        }
        egui::ScrollArea::both()
            .id_source("reference_scroll")
            .min_scrolled_height(550.0)
            .show(ui, |ui| {
                egui::Grid::new("reference_grid")
                    .striped(true)
                    .num_columns(table.column_count())
                    .show(ui, |ui| {
                        for (r, row) in table.rows.iter().enumerate() {
                            for cell in row {
                                if r == 0 {
                                    ui.label(
                                        egui::RichText::new(cell)
                                            .strong()
                                            .color(egui::Color32::WHITE)
                                            .background_color(HEADER_BG),
                                    );
                                } else {
                                    ui.label(cell);
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

/// 입력 또는 출력 단위 콤보박스. 선택이 바뀌면 true.
fn unit_selector(
    ui: &mut egui::Ui,
    id: (&str, usize),
    session: &mut ConversionSession,
    input_side: bool,
) -> bool {
    let names: Vec<String> = session.unit_options().into_iter().map(String::from).collect();
    let (from, to) = session.selected_units();
    let (mut from, mut to) = (from.to_string(), to.to_string());
    let selected = if input_side { &mut from } else { &mut to };
    let before = selected.clone();
    egui::ComboBox::from_id_source(id)
        .selected_text(selected.as_str())
        .width(240.0)
        .show_ui(ui, |ui| {
            for name in &names {
                ui.selectable_value(selected, name.clone(), name.as_str());
            }
        });
    if *selected == before {
        return false;
    }
    match session.select_units(&from, &to) {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "단위 선택 실패");
            false
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Units, "단위 환산");
                ui.selectable_value(&mut self.tab, Tab::Thickness, "배관 두께 계산");
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| match self.tab {
                Tab::Units => self.ui_units(ui),
                Tab::Thickness => self.ui_thickness(ui),
            });
        });
    }
}
