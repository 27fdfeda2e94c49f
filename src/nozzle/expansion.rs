use std::fmt;

use super::error::{NozzleError, NozzleResult};

/// 이상 팽창 판정에 쓰는 기본 상대 허용치(2%).
pub const DEFAULT_RTOL: f64 = 0.02;

/// pa/p0 가 0 에 가까울 때 분모로 쓰는 하한
const MIN_AMBIENT_RATIO: f64 = 1e-15;

/// 출구압과 대기압의 관계로 본 팽창 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionRegime {
    /// pe > pa
    UnderExpanded,
    /// pe ≈ pa
    IdeallyExpanded,
    /// pe < pa
    OverExpanded,
}

impl ExpansionRegime {
    pub fn label(&self) -> &'static str {
        match self {
            ExpansionRegime::UnderExpanded => "under-expanded",
            ExpansionRegime::IdeallyExpanded => "ideally-expanded",
            ExpansionRegime::OverExpanded => "over-expanded",
        }
    }
}

impl fmt::Display for ExpansionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 팽창 상태 판정 결과와 설명.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionVerdict {
    pub regime: ExpansionRegime,
    pub note: String,
}

/// 출구압 pe/p0 와 대기압 pa/p0 를 비교해 팽창 상태를 판정한다.
///
/// 상대오차 |pe - pa| / max(|pa|, 1e-15) 가 `rtol` 이하이면 이상 팽창으로 본다.
pub fn classify_expansion(pe_p0: f64, pa_p0: f64, rtol: f64) -> NozzleResult<ExpansionVerdict> {
    if rtol.is_nan() || rtol < 0.0 {
        return Err(NozzleError::domain("rtol must be >= 0. Iterate and re-run."));
    }

    let denominator = pa_p0.abs().max(MIN_AMBIENT_RATIO);
    let relative_error = (pe_p0 - pa_p0).abs() / denominator;

    let verdict = if relative_error <= rtol {
        ExpansionVerdict {
            regime: ExpansionRegime::IdeallyExpanded,
            note: format!(
                "pe ~= pa within {:.1}% relative tolerance.",
                rtol * 100.0
            ),
        }
    } else if pe_p0 > pa_p0 {
        ExpansionVerdict {
            regime: ExpansionRegime::UnderExpanded,
            note: "pe > pa: nozzle could expand more for this ambient pressure. Iterate and re-run."
                .into(),
        }
    } else {
        ExpansionVerdict {
            regime: ExpansionRegime::OverExpanded,
            note: "pe < pa: over-expanded and flow may shock. Iterate and re-run.".into(),
        }
    };
    Ok(verdict)
}
