//! 인증 인프라.
//!
//! core의 협력자 trait에 대한 구현과 Axum 추출기를 제공합니다.
//!
//! # 구성 요소
//!
//! - [`Argon2PasswordHasher`]: Argon2id `PasswordHasher`
//! - [`JwtTokenIssuer`]: HS256 `TokenIssuer`
//! - [`JwtAuth`]: Bearer 토큰 검증 추출기

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtError, JwtTokenIssuer};
pub use middleware::{JwtAuth, JwtAuthError};
pub use password::Argon2PasswordHasher;
