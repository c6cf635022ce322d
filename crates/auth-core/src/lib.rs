//! # Auth Core
//!
//! 회원가입/로그인의 핵심 도메인 모델과 인증 로직을 제공합니다.
//!
//! 이 크레이트는 다음을 포함합니다:
//! - 사용자 도메인 타입 (`User`, `NewUser`, `Role`)
//! - 사용자 이름/비밀번호 형식 검증
//! - 외부 협력자 trait (`UserStore`, `PasswordHasher`, `TokenIssuer`, `Clock`)
//! - 회원가입/로그인 오케스트레이션 (`AuthService`)
//! - 인메모리 사용자 저장소
//! - 설정 관리 및 로깅 인프라

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod memory;
pub mod service;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use memory::InMemoryUserStore;
pub use service::AuthService;
pub use validation::{validate_password, validate_username};
