//! 비밀번호 해싱.
//!
//! Argon2id 기반 `PasswordHasher` 구현.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};
use auth_core::{AuthError, PasswordHasher};

/// Argon2id 비밀번호 해셔.
///
/// 솔트는 해싱할 때마다 새로 생성되며 PHC 문자열에 포함됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    /// PHC 형식 해시 문자열 반환 (예: `$argon2id$v=19$m=19456,t=2,p=1$...`).
    fn hash(&self, raw: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(format!("비밀번호 해싱 실패: {}", e)))?;

        Ok(hash.to_string())
    }

    /// 해시 형식이 잘못된 경우에도 `false`를 반환합니다.
    fn verify(&self, raw: &str, hashed: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hashed) else {
            tracing::warn!("저장된 비밀번호 해시 형식이 올바르지 않습니다");
            return false;
        };

        Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }
}
