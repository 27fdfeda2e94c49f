use std::process::ExitCode;

use clap::Parser;
use nozzle_expansion_toolbox::{app, config, ui_cli};
use tracing::debug;

/// 프로그램의 엔트리 포인트. 인자와 설정을 합친 뒤 노즐 해석을 한 번 실행한다.
fn main() -> ExitCode {
    let cli = ui_cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.max_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &ui_cli::Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_optional(cli.config.as_deref())?;
    debug!(source = ?cli.config, "configuration loaded");
    cli.apply_to(&mut cfg)?;

    if let Some(path) = &cli.save_config {
        cfg.save(path)?;
        debug!(path = %path.display(), "configuration saved");
    }

    let report = app::run(&cfg)?;
    ui_cli::print_report(&report);
    Ok(())
}
