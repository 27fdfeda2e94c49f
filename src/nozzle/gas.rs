use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{NozzleError, NozzleResult};

/// 비열비(gamma)를 담는 불변 값. 생성 시 gamma > 1 을 보장한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    gamma: f64,
}

impl GasProperties {
    /// gamma 를 검증해 기체 물성을 만든다.
    pub fn new(gamma: f64) -> NozzleResult<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(NozzleError::domain(
                "gamma must be > 1. Iterate and re-run.",
            ));
        }
        Ok(Self { gamma })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// (gamma - 1) / 2
    pub(crate) fn half_gamma_minus_one(&self) -> f64 {
        (self.gamma - 1.0) * 0.5
    }

    /// 1 + (gamma - 1)/2 * M²
    pub(crate) fn stagnation_factor(&self, mach: f64) -> f64 {
        1.0 + self.half_gamma_minus_one() * mach * mach
    }
}

/// 면적비-마하수 관계의 두 해 중 어느 쪽을 택할지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Branch {
    /// M < 1
    Subsonic,
    /// M > 1
    #[default]
    Supersonic,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Subsonic => "Subsonic",
            Branch::Supersonic => "Supersonic",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = NozzleError;

    /// "Subsonic"/"Supersonic" 만 허용한다. 대소문자도 구분한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Subsonic" => Ok(Branch::Subsonic),
            "Supersonic" => Ok(Branch::Supersonic),
            _ => Err(NozzleError::domain(
                "branch must be 'Subsonic' or 'Supersonic'. Iterate and re-run.",
            )),
        }
    }
}

impl TryFrom<String> for Branch {
    type Error = NozzleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_gamma_at_or_below_one() {
        assert!(GasProperties::new(1.0).is_err());
        assert!(GasProperties::new(0.5).is_err());
        assert!(GasProperties::new(f64::NAN).is_err());
        assert!(GasProperties::new(1.4).is_ok());
    }

    #[test]
    fn branch_parses_exact_names() {
        assert_eq!("Subsonic".parse::<Branch>(), Ok(Branch::Subsonic));
        assert_eq!("Supersonic".parse::<Branch>(), Ok(Branch::Supersonic));
        assert!("supersonic".parse::<Branch>().is_err());
        assert!(" Supersonic ".parse::<Branch>().is_err());
        assert!("Subsonic\n".parse::<Branch>().is_err());
        assert!(matches!(
            "Sideways".parse::<Branch>(),
            Err(NozzleError::Domain { .. })
        ));
    }

    #[test]
    fn default_branch_is_supersonic() {
        assert_eq!(Branch::default(), Branch::Supersonic);
        assert_eq!(Branch::Subsonic.to_string(), "Subsonic");
    }
}
