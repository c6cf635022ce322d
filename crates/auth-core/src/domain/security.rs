//! 비밀번호 해싱과 토큰 발급 협력자.

use crate::error::AuthError;

/// 단방향 비밀번호 해셔.
///
/// 솔트가 적용된 느린 해시 함수여야 합니다.
/// 인증 서비스는 해시 문자열의 내부 구조를 해석하지 않습니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호 해싱.
    fn hash(&self, raw: &str) -> Result<String, AuthError>;

    /// 평문 비밀번호와 저장된 해시 비교. 형식이 잘못된 해시는 `false`입니다.
    fn verify(&self, raw: &str, hashed: &str) -> bool;
}

/// Bearer 토큰 발급자.
pub trait TokenIssuer: Send + Sync {
    /// 인증된 사용자에 대한 불투명 토큰 발급.
    fn issue(&self, user_id: i64, username: &str) -> Result<String, AuthError>;
}
