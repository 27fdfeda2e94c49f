use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::nozzle::{
    classify_expansion, exit_condition, thrust_coefficient, thrust_warning, ExitCondition,
    ExpansionVerdict, NozzleError, ThrustWarning,
};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 로드/저장 또는 필수 입력 누락
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),

    /// 입력 검증 또는 솔버 실패
    #[error("계산 오류: {0}")]
    Nozzle(#[from] NozzleError),
}

/// 한 번의 노즐 해석 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct NozzleReport {
    pub exit: ExitCondition,
    pub verdict: ExpansionVerdict,
    pub thrust_coefficient: f64,
    pub warning: Option<ThrustWarning>,
}

/// 설정으로부터 출구 상태, 팽창 판정, 추력계수를 계산한다.
pub fn run(config: &Config) -> Result<NozzleReport, AppError> {
    let inputs = config.resolve()?;
    debug!(
        gamma = inputs.gamma,
        ae_at = inputs.ae_at,
        pa_p0 = inputs.pa_p0,
        branch = %inputs.branch,
        rtol = inputs.rtol,
        tol = inputs.settings.tol,
        max_iter = inputs.settings.max_iter,
        "resolved nozzle inputs"
    );

    let exit = exit_condition(inputs.ae_at, inputs.gamma, inputs.branch, inputs.settings)?;
    debug!(
        mach_exit = exit.mach_exit,
        pe_p0 = exit.pe_p0,
        te_t0 = exit.te_t0,
        "exit condition solved"
    );

    let c_f = thrust_coefficient(inputs.gamma, exit.pe_p0, inputs.pa_p0, inputs.ae_at)?;
    let verdict = classify_expansion(exit.pe_p0, inputs.pa_p0, inputs.rtol)?;
    let warning = thrust_warning(c_f);
    debug!(regime = %verdict.regime, c_f, ?warning, "nozzle analysis finished");

    Ok(NozzleReport {
        exit,
        verdict,
        thrust_coefficient: c_f,
        warning,
    })
}
