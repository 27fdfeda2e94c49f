use thiserror::Error;

use super::gas::Branch;

/// 노즐 계산 중 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NozzleError {
    /// 입력값이 함수의 정의역을 벗어난 경우
    #[error("입력 오류: {what}")]
    Domain { what: &'static str },

    /// 초기/확장 구간에서 부호 변화를 찾지 못한 경우
    #[error("{branch} 해 구간을 찾지 못했습니다 (A/A* = {target}). Iterate and re-run.")]
    RootBracket { branch: Branch, target: f64 },

    /// 반복 횟수 안에 허용 오차를 만족하지 못한 경우
    #[error("이분법이 {max_iter}회 안에 수렴하지 않았습니다 (구간 폭 {width:e}). Iterate and re-run.")]
    Convergence { max_iter: usize, width: f64 },
}

impl NozzleError {
    pub(crate) fn domain(what: &'static str) -> Self {
        NozzleError::Domain { what }
    }
}

pub type NozzleResult<T> = Result<T, NozzleError>;
