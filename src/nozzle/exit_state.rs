use super::error::{NozzleError, NozzleResult};
use super::gas::{Branch, GasProperties};
use super::isentropic::{pressure_ratio, temperature_ratio};
use super::mach_solver::{solve_mach, SolverSettings};

/// 노즐 출구 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitCondition {
    /// 출구/목 면적비 Ae/At
    pub ae_at: f64,
    /// 출구 마하수 Me
    pub mach_exit: f64,
    /// 출구 정압/전압 pe/p0
    pub pe_p0: f64,
    /// 출구 정온/전온 Te/T0
    pub te_t0: f64,
}

/// Ae/At 와 gamma 로부터 출구 상태를 계산한다.
///
/// 면적비 → 마하수(이분법) → 압력비/온도비 순서로 계산하며, 하위 단계의
/// 오류는 그대로 전달한다.
pub fn exit_condition(
    ae_at: f64,
    gamma: f64,
    branch: Branch,
    settings: SolverSettings,
) -> NozzleResult<ExitCondition> {
    if !ae_at.is_finite() || ae_at < 1.0 {
        return Err(NozzleError::domain("Ae/At must be >= 1. Iterate and re-run."));
    }
    GasProperties::new(gamma)?;

    let mach_exit = solve_mach(ae_at, gamma, branch, settings)?;
    let pe_p0 = pressure_ratio(mach_exit, gamma)?;
    let te_t0 = temperature_ratio(mach_exit, gamma)?;

    Ok(ExitCondition {
        ae_at,
        mach_exit,
        pe_p0,
        te_t0,
    })
}
