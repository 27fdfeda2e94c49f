use std::fmt;

use super::error::{NozzleError, NozzleResult};
use super::exit_state::exit_condition;
use super::gas::{Branch, GasProperties};
use super::mach_solver::SolverSettings;

/// 이 값을 넘는 C_F 는 비정상적으로 큰 것으로 본다.
const CF_UPPER_WARNING: f64 = 5.0;

/// 이상 추력계수 C_F 를 계산한다.
///
/// C_F = sqrt[(2γ²/(γ-1)) * (2/(γ+1))^((γ+1)/(γ-1)) * (1 - (pe/p0)^((γ-1)/γ))]
///       + (pe/p0 - pa/p0) * (Ae/At)
///
/// 앞 항은 운동량 추력, 뒤 항은 압력 불일치 추력이다. pe/p0 < 1 이면 근호 안은 항상 양수다.
pub fn thrust_coefficient(gamma: f64, pe_p0: f64, pa_p0: f64, ae_at: f64) -> NozzleResult<f64> {
    GasProperties::new(gamma)?;
    if !(0.0..1.0).contains(&pe_p0) {
        return Err(NozzleError::domain(
            "pe_p0 must be in [0, 1). Iterate and re-run.",
        ));
    }
    if !(0.0..1.0).contains(&pa_p0) {
        return Err(NozzleError::domain(
            "pa_p0 must be in [0, 1). Iterate and re-run.",
        ));
    }
    if !ae_at.is_finite() || ae_at < 1.0 {
        return Err(NozzleError::domain("Ae/At must be >= 1. Iterate and re-run."));
    }

    let coefficient = (2.0 * gamma * gamma / (gamma - 1.0))
        * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (gamma - 1.0));
    let momentum = (coefficient * (1.0 - pe_p0.powf((gamma - 1.0) / gamma))).sqrt();
    let pressure = (pe_p0 - pa_p0) * ae_at;
    Ok(momentum + pressure)
}

/// Ae/At → Me → pe/p0 → C_F 를 한 번에 계산한다.
pub fn thrust_coefficient_from_geometry(
    gamma: f64,
    ae_at: f64,
    pa_p0: f64,
    branch: Branch,
    settings: SolverSettings,
) -> NozzleResult<f64> {
    let exit = exit_condition(ae_at, gamma, branch, settings)?;
    thrust_coefficient(gamma, exit.pe_p0, pa_p0, ae_at)
}

/// 비정상적인 C_F 값에 대한 경고.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustWarning {
    /// C_F < 0
    Negative,
    /// C_F > 5
    VeryLarge,
}

impl ThrustWarning {
    pub fn message(&self) -> &'static str {
        match self {
            ThrustWarning::Negative => "C_F is negative. Iterate and re-run.",
            ThrustWarning::VeryLarge => "C_F is very large. Iterate and re-run.",
        }
    }
}

impl fmt::Display for ThrustWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// C_F 가 음수이거나 지나치게 크면 경고를 돌려준다.
pub fn thrust_warning(c_f: f64) -> Option<ThrustWarning> {
    if c_f < 0.0 {
        Some(ThrustWarning::Negative)
    } else if c_f > CF_UPPER_WARNING {
        Some(ThrustWarning::VeryLarge)
    } else {
        None
    }
}
