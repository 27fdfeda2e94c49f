//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 함수를 쓰도록 한다.

pub mod app;
pub mod config;
pub mod nozzle;
pub mod ui_cli;
