use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::nozzle::{Branch, SolverSettings, DEFAULT_RTOL};

/// 이분법 설정 섹션(`[solver]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub tol: f64,
    pub max_iter: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let settings = SolverSettings::default();
        Self {
            tol: settings.tol,
            max_iter: settings.max_iter,
        }
    }
}

impl From<SolverConfig> for SolverSettings {
    fn from(value: SolverConfig) -> Self {
        SolverSettings {
            tol: value.tol,
            max_iter: value.max_iter,
        }
    }
}

/// 노즐 해석 설정. 모든 키는 생략 가능하며 CLI 플래그가 파일 값보다 우선한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 비열비 (>1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    /// 면적비 Ae/At (>=1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ae_at: Option<f64>,
    /// 대기압비 pa/p0, [0,1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_p0: Option<f64>,
    pub branch: Branch,
    /// 이상 팽창 판정 상대 허용치
    pub rtol: f64,
    pub solver: SolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gamma: None,
            ae_at: None,
            pa_p0: None,
            branch: Branch::default(),
            rtol: DEFAULT_RTOL,
            solver: SolverConfig::default(),
        }
    }
}

/// 한 번의 해석에 필요한 값이 모두 채워진 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunInputs {
    pub gamma: f64,
    pub ae_at: f64,
    pub pa_p0: f64,
    pub branch: Branch,
    pub rtol: f64,
    pub settings: SolverSettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 필수 입력이 CLI 와 설정 파일 어디에도 없음
    #[error("필수 입력 --{name} 이(가) 없습니다.")]
    MissingInput { name: &'static str },
}

/// TOML 설정 파일을 읽는다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// 경로가 주어지면 파일을 읽고, 없으면 기본 설정을 돌려준다.
pub fn load_optional(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load(path),
        None => Ok(Config::default()),
    }
}

impl Config {
    /// 설정을 TOML 로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 필수 값(gamma, Ae/At, pa/p0)이 모두 있는지 확인하고 실행 입력으로 바꾼다.
    /// 값의 범위는 계산 단계에서 검증한다.
    pub fn resolve(&self) -> Result<RunInputs, ConfigError> {
        let gamma = self.gamma.ok_or(ConfigError::MissingInput { name: "gamma" })?;
        let ae_at = self.ae_at.ok_or(ConfigError::MissingInput { name: "Ae_At" })?;
        let pa_p0 = self.pa_p0.ok_or(ConfigError::MissingInput { name: "pa_p0" })?;
        Ok(RunInputs {
            gamma,
            ae_at,
            pa_p0,
            branch: self.branch,
            rtol: self.rtol,
            settings: self.solver.into(),
        })
    }
}
