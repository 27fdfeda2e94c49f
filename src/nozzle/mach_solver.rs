//! 면적비로부터 마하수를 역산하는 이분법 솔버.
//!
//! 면적-마하 관계는 M = 1 양쪽에서 각각 단조이므로 분기(branch)를 정하면
//! 해가 하나로 결정된다. 분기별 초기 구간에서 부호 변화를 확인한 뒤
//! 구간 폭이 `tol` 보다 작아질 때까지 절반씩 줄인다.

use super::error::{NozzleError, NozzleResult};
use super::gas::{Branch, GasProperties};
use super::isentropic::area_ratio_unchecked;

/// 목(throat) 판정 허용치. |A/A* - 1| 이 이보다 작으면 M = 1 을 그대로 돌려준다.
const THROAT_TOL: f64 = 1e-14;
/// 초기 구간을 M = 0, M = 1 에서 떼어놓는 간격
const BRACKET_EPS: f64 = 1e-12;
const SUPERSONIC_UPPER_MACH: f64 = 50.0;
/// 초음속 상한을 두 배씩 늘리는 최대 횟수
const MAX_BRACKET_DOUBLINGS: usize = 20;

/// 이분법 종료 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// 구간 폭이 이 값보다 작아지면 중점을 해로 반환한다.
    pub tol: f64,
    /// 최대 이분 횟수
    pub max_iter: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 200,
        }
    }
}

impl SolverSettings {
    /// tol > 0, max_iter >= 1 을 확인한다.
    pub fn validate(&self) -> NozzleResult<()> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(NozzleError::domain("tol must be > 0. Iterate and re-run."));
        }
        if self.max_iter < 1 {
            return Err(NozzleError::domain(
                "max_iter must be >= 1. Iterate and re-run.",
            ));
        }
        Ok(())
    }
}

/// 주어진 면적비 A/A* 에 해당하는 마하수를 구한다.
///
/// # Errors
///
/// - 입력이 정의역을 벗어나면 `NozzleError::Domain`
/// - 부호 변화를 찾지 못하면 `NozzleError::RootBracket`
/// - `max_iter` 안에 수렴하지 못하면 `NozzleError::Convergence`
pub fn solve_mach(
    area_ratio_target: f64,
    gamma: f64,
    branch: Branch,
    settings: SolverSettings,
) -> NozzleResult<f64> {
    let gas = GasProperties::new(gamma)?;
    if !area_ratio_target.is_finite() || area_ratio_target < 1.0 {
        return Err(NozzleError::domain("A/A* must be >= 1. Iterate and re-run."));
    }
    settings.validate()?;

    if (area_ratio_target - 1.0).abs() < THROAT_TOL {
        return Ok(1.0);
    }

    let residual = |mach: f64| area_ratio_unchecked(mach, &gas) - area_ratio_target;
    let mut bracket = initial_bracket(branch, area_ratio_target, residual)?;

    for _ in 0..settings.max_iter {
        let mid = bracket.midpoint();
        let mid_residual = residual(mid);

        if bracket.width() < settings.tol {
            return Ok(mid);
        }

        bracket.shrink(mid, mid_residual);
    }

    Err(NozzleError::Convergence {
        max_iter: settings.max_iter,
        width: bracket.width(),
    })
}

/// 분기별 초기 구간을 잡고, 초음속이면 필요시 상한을 넓힌다.
fn initial_bracket(
    branch: Branch,
    target: f64,
    residual: impl Fn(f64) -> f64,
) -> NozzleResult<Bracket> {
    let (lower, upper) = match branch {
        Branch::Subsonic => (BRACKET_EPS, 1.0 - BRACKET_EPS),
        Branch::Supersonic => (1.0 + BRACKET_EPS, SUPERSONIC_UPPER_MACH),
    };
    let mut bracket = Bracket::new(lower, upper, residual(lower), residual(upper));
    if bracket.holds_root() {
        return Ok(bracket);
    }

    if branch == Branch::Supersonic {
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            let upper = bracket.upper * 2.0;
            bracket.upper = upper;
            bracket.upper_residual = residual(upper);
            if bracket.holds_root() {
                return Ok(bracket);
            }
        }
    }

    Err(NozzleError::RootBracket { branch, target })
}

/// 현재 구간과 양 끝 잔차.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bracket {
    lower: f64,
    upper: f64,
    lower_residual: f64,
    upper_residual: f64,
}

impl Bracket {
    fn new(lower: f64, upper: f64, lower_residual: f64, upper_residual: f64) -> Self {
        Self {
            lower,
            upper,
            lower_residual,
            upper_residual,
        }
    }

    /// 양 끝 잔차의 곱이 0 이하이면 구간 안에 근이 있다.
    fn holds_root(&self) -> bool {
        self.lower_residual * self.upper_residual <= 0.0
    }

    fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    fn width(&self) -> f64 {
        (self.upper - self.lower).abs()
    }

    /// 중점의 잔차 부호를 보고 구간의 한쪽 끝을 중점으로 옮긴다.
    fn shrink(&mut self, mid: f64, mid_residual: f64) {
        if self.lower_residual * mid_residual <= 0.0 {
            self.upper = mid;
            self.upper_residual = mid_residual;
        } else {
            self.lower = mid;
            self.lower_residual = mid_residual;
        }
    }
}
