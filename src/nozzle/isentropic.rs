//! 등엔트로피 유동 관계식. 모두 마하수와 gamma 만의 닫힌 형태 함수다.

use super::error::{NozzleError, NozzleResult};
use super::gas::GasProperties;

/// 면적비 A/A* 를 계산한다.
///
/// A/A* = (1/M) * [(2/(γ+1)) * (1 + (γ-1)/2 * M²)]^((γ+1)/(2(γ-1)))
///
/// M = 1 에서 최솟값 1을 가지며 아음속 쪽은 감소, 초음속 쪽은 증가한다.
pub fn area_ratio(mach: f64, gamma: f64) -> NozzleResult<f64> {
    let gas = GasProperties::new(gamma)?;
    if !mach.is_finite() || mach <= 0.0 {
        return Err(NozzleError::domain(
            "Mach number M must be > 0. Iterate and re-run.",
        ));
    }
    Ok(area_ratio_unchecked(mach, &gas))
}

/// 검증이 끝난 입력용. 솔버 내부 반복에서 사용한다.
pub(crate) fn area_ratio_unchecked(mach: f64, gas: &GasProperties) -> f64 {
    let gamma = gas.gamma();
    let throat_term = 2.0 / (gamma + 1.0);
    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    (throat_term * gas.stagnation_factor(mach)).powf(exponent) / mach
}

/// 정압/전압 비 p/p0 = [1 + (γ-1)/2 * M²]^(-γ/(γ-1))
pub fn pressure_ratio(mach: f64, gamma: f64) -> NozzleResult<f64> {
    let gas = GasProperties::new(gamma)?;
    check_non_negative_mach(mach)?;
    Ok(gas.stagnation_factor(mach).powf(-gamma / (gamma - 1.0)))
}

/// 정온/전온 비 T/T0 = [1 + (γ-1)/2 * M²]^(-1)
pub fn temperature_ratio(mach: f64, gamma: f64) -> NozzleResult<f64> {
    let gas = GasProperties::new(gamma)?;
    check_non_negative_mach(mach)?;
    Ok(1.0 / gas.stagnation_factor(mach))
}

fn check_non_negative_mach(mach: f64) -> NozzleResult<()> {
    if !mach.is_finite() || mach < 0.0 {
        return Err(NozzleError::domain(
            "Mach number M must be >= 0. Iterate and re-run.",
        ));
    }
    Ok(())
}
