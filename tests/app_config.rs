use std::fs;
use std::path::PathBuf;

use nozzle_expansion_toolbox::{
    app::{self, AppError},
    config::{self, Config, ConfigError},
    nozzle::{Branch, ExpansionRegime, NozzleError, ThrustWarning},
    ui_cli,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("nozzle_{}_{name}.toml", std::process::id()))
}

fn sample_config() -> Config {
    Config {
        gamma: Some(1.4),
        ae_at: Some(10.0),
        pa_p0: Some(0.02),
        ..Config::default()
    }
}

#[test]
fn full_run_reports_overexpanded_nozzle() {
    let report = app::run(&sample_config()).expect("run");
    assert!(report.exit.mach_exit > 3.9);
    assert_eq!(report.verdict.regime, ExpansionRegime::OverExpanded);
    assert!(report.thrust_coefficient > 0.0);
    assert!(report.warning.is_none());

    let text = ui_cli::render_report(&report);
    assert!(text.contains("\nExit Condition\n"));
    assert!(text.contains("Ae/At = 10\n"));
    assert!(text.contains("\nAnalysis\n"));
    assert!(text.contains("Regime = over-expanded\n"));
    assert!(text.contains("\nPerformance\n"));
    assert!(text.contains("C_F = 1.4"));
}

#[test]
fn negative_thrust_prints_warning_line() {
    let cfg = Config {
        gamma: Some(1.4),
        ae_at: Some(100.0),
        pa_p0: Some(0.5),
        ..Config::default()
    };
    let report = app::run(&cfg).expect("run");
    assert_eq!(report.warning, Some(ThrustWarning::Negative));

    let text = ui_cli::render_report(&report);
    assert!(text.ends_with("C_F = -48.25015335\nC_F is negative. Iterate and re-run.\n"));
}

#[test]
fn very_large_thrust_prints_warning_line() {
    // 아음속 해에서는 pe/p0 가 1 에 가까워 압력항이 Ae/At 만큼 커진다.
    let cfg = Config {
        gamma: Some(1.4),
        ae_at: Some(10.0),
        pa_p0: Some(0.0),
        branch: Branch::Subsonic,
        ..Config::default()
    };
    let report = app::run(&cfg).expect("run");
    assert!(report.thrust_coefficient > 5.0);
    assert_eq!(report.warning, Some(ThrustWarning::VeryLarge));

    let text = ui_cli::render_report(&report);
    assert!(text.ends_with("C_F is very large. Iterate and re-run.\n"));
}

#[test]
fn missing_required_input_is_reported() {
    let cfg = Config {
        gamma: None,
        ..sample_config()
    };
    let err = app::run(&cfg).expect_err("gamma missing");
    assert!(matches!(
        err,
        AppError::Config(ConfigError::MissingInput { name: "gamma" })
    ));
}

#[test]
fn invalid_values_surface_as_domain_errors() {
    let cfg = Config {
        gamma: Some(1.0),
        ..sample_config()
    };
    assert!(matches!(
        app::run(&cfg),
        Err(AppError::Nozzle(NozzleError::Domain { .. }))
    ));

    let cfg = Config {
        rtol: -0.01,
        ..sample_config()
    };
    assert!(matches!(
        app::run(&cfg),
        Err(AppError::Nozzle(NozzleError::Domain { .. }))
    ));
}

#[test]
fn partial_file_keeps_defaults() {
    let path = temp_path("partial");
    fs::write(&path, "gamma = 1.3\nbranch = \"Subsonic\"\n\n[solver]\nmax_iter = 80\n")
        .expect("write");
    let cfg = config::load(&path).expect("load");
    fs::remove_file(&path).ok();

    assert_eq!(cfg.gamma, Some(1.3));
    assert_eq!(cfg.ae_at, None);
    assert_eq!(cfg.branch, Branch::Subsonic);
    assert_eq!(cfg.rtol, 0.02);
    assert_eq!(cfg.solver.max_iter, 80);
    assert_eq!(cfg.solver.tol, 1e-10);
}

#[test]
fn saved_config_loads_back() {
    let path = temp_path("roundtrip");
    let cfg = Config {
        branch: Branch::Subsonic,
        rtol: 0.05,
        ..sample_config()
    };
    cfg.save(&path).expect("save");
    let loaded = config::load(&path).expect("load");
    fs::remove_file(&path).ok();
    assert_eq!(loaded, cfg);
}

#[test]
fn unknown_branch_in_file_reports_branch_message() {
    let path = temp_path("bad_branch");
    fs::write(&path, "branch = \" Supersonic\"\n").expect("write");
    let err = config::load(&path).expect_err("bad branch");
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err
        .to_string()
        .contains("branch must be 'Subsonic' or 'Supersonic'"));
}

#[test]
fn no_path_means_defaults() {
    let cfg = config::load_optional(None).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert!(matches!(
        cfg.resolve(),
        Err(ConfigError::MissingInput { name: "gamma" })
    ));
}
