use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::app::NozzleReport;
use crate::config::Config;
use crate::nozzle::{Branch, NozzleError};

/// 명령행 인자. 주지 않은 값은 설정 파일 또는 기본값을 따른다.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nozzle_expansion_toolbox")]
#[command(about = "Ideal nozzle analysis for expansion ratios.", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Specific heat ratio gamma (>1).
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Area ratio Ae/At (>=1).
    #[arg(long = "Ae_At")]
    pub ae_at: Option<f64>,

    /// Ambient ratio pa/p0 in [0,1).
    #[arg(long = "pa_p0")]
    pub pa_p0: Option<f64>,

    /// Mach inversion branch [default: Supersonic].
    #[arg(long, value_parser = ["Subsonic", "Supersonic"])]
    pub branch: Option<String>,

    /// Relative tolerance for ideal expansion check [default: 0.02].
    #[arg(long)]
    pub rtol: Option<f64>,

    /// Bisection bracket width tolerance [default: 1e-10].
    #[arg(long)]
    pub tol: Option<f64>,

    /// Maximum bisection iterations [default: 200].
    #[arg(long = "max-iter")]
    pub max_iter: Option<usize>,

    /// TOML file with any of the options above.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the merged options to this TOML file before running.
    #[arg(long = "save-config")]
    pub save_config: Option<PathBuf>,

    /// Log level written to stderr.
    #[arg(
        long = "log-level",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,
}

impl Cli {
    /// CLI 에서 받은 값으로 설정을 덮어쓴다.
    pub fn apply_to(&self, cfg: &mut Config) -> Result<(), NozzleError> {
        if let Some(gamma) = self.gamma {
            cfg.gamma = Some(gamma);
        }
        if let Some(ae_at) = self.ae_at {
            cfg.ae_at = Some(ae_at);
        }
        if let Some(pa_p0) = self.pa_p0 {
            cfg.pa_p0 = Some(pa_p0);
        }
        if let Some(branch) = &self.branch {
            cfg.branch = branch.parse::<Branch>()?;
        }
        if let Some(rtol) = self.rtol {
            cfg.rtol = rtol;
        }
        if let Some(tol) = self.tol {
            cfg.solver.tol = tol;
        }
        if let Some(max_iter) = self.max_iter {
            cfg.solver.max_iter = max_iter;
        }
        Ok(())
    }

    /// `--log-level` 를 tracing 레벨로 바꾼다. 알 수 없는 값은 WARN.
    pub fn max_level(&self) -> Level {
        match self.log_level.as_str() {
            "error" => Level::ERROR,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        }
    }
}

/// 결과 보고서를 세 구역(Exit Condition / Analysis / Performance)으로 만든다.
pub fn render_report(report: &NozzleReport) -> String {
    let exit = &report.exit;
    let mut out = String::new();
    out.push_str("\nExit Condition\n");
    out.push_str(&format!("Ae/At = {}\n", format_general(exit.ae_at, 6)));
    out.push_str(&format!("Me = {}\n", format_general(exit.mach_exit, 10)));
    out.push_str(&format!("pe/p0 = {}\n", format_general(exit.pe_p0, 10)));
    out.push_str(&format!("Te/T0 = {}\n", format_general(exit.te_t0, 10)));

    out.push_str("\nAnalysis\n");
    out.push_str(&format!("Regime = {}\n", report.verdict.regime));
    out.push_str(&format!("Note = {}\n", report.verdict.note));

    out.push_str("\nPerformance\n");
    out.push_str(&format!(
        "C_F = {}\n",
        format_general(report.thrust_coefficient, 10)
    ));
    if let Some(warning) = report.warning {
        out.push_str(&format!("{warning}\n"));
    }
    out
}

pub fn print_report(report: &NozzleReport) {
    println!("{}", render_report(report));
}

/// C 의 `%.{precision}g` 와 같은 규칙으로 숫자를 표시한다.
/// 지수가 -4 미만이거나 유효자릿수 이상이면 지수 표기, 아니면 고정소수 표기이며
/// 끝의 0 은 지운다.
pub fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".into();
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
