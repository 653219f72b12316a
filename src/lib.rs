//! 배관/계장 엔지니어용 계산 엔진. 단위 환산, 온도 환산, 배관 최소 두께 계산과
//! 참조 데이터 표를 라이브러리로 분리하여 CLI 와 GUI 가 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod logging;
pub mod piping;
pub mod quantity;
pub mod session;
pub mod ui_cli;
pub mod units;
