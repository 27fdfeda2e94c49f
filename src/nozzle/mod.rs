//! 축소-확대 노즐 출구의 등엔트로피 유동 계산 모듈 모음.
//! 면적비 → 출구 마하수 → 압력/온도비 → 추력계수 순으로 구성한다.

pub mod error;
pub mod exit_state;
pub mod expansion;
pub mod gas;
pub mod isentropic;
pub mod mach_solver;
pub mod thrust;

pub use error::*;
pub use exit_state::*;
pub use expansion::*;
pub use gas::*;
pub use isentropic::*;
pub use mach_solver::*;
pub use thrust::*;
