//! 요청 단위로만 존재하는 자격증명과 인증 결과 타입.

use serde::{Deserialize, Serialize};

/// 회원가입/로그인 요청의 (사용자 이름, 평문 비밀번호) 쌍.
///
/// 저장되지 않으며, `Debug` 출력에서 비밀번호는 가려집니다.
#[derive(Clone, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 회원가입 결과.
///
/// 생성된 식별자와 사용자 이름만 포함합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpResult {
    pub id: i64,
    pub username: String,
}

/// 로그인 결과.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub user_id: i64,
    pub username: String,
    /// Bearer 토큰
    pub token: String,
}

impl std::fmt::Debug for LoginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResult")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_deserialize_camel_case() {
        let creds: Credentials =
            serde_json::from_str(r#"{"userName":"validuser1","password":"ValidPass123"}"#).unwrap();

        assert_eq!(creds.user_name, "validuser1");
        assert_eq!(creds.password, "ValidPass123");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("validuser1", "ValidPass123");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("validuser1"));
        assert!(!debug.contains("ValidPass123"));
    }
}
