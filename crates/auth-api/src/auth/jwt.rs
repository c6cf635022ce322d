//! JWT 토큰 처리.
//!
//! HS256 Access Token 발급 및 검증. 발급 시각과 만료 판정은
//! 주입된 `Clock`을 기준으로 합니다.

use std::sync::Arc;

use auth_core::{AuthError, Clock, TokenIssuer};
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// JWT Access Token 페이로드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 ID
    pub sub: String,
    /// 사용자 이름
    pub username: String,
    /// Issued At - 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// JWT ID - 토큰 고유 식별자
    pub jti: String,
}

impl Claims {
    /// `sub`에 담긴 사용자 ID.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// JWT 토큰 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("토큰 디코딩 실패")]
    DecodingError,
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("잘못된 토큰 형식")]
    InvalidToken,
}

/// HS256 JWT 발급자.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in_minutes: i64,
    clock: Arc<dyn Clock>,
}

impl JwtTokenIssuer {
    /// 새로운 JwtTokenIssuer 생성.
    ///
    /// # Arguments
    ///
    /// * `secret` - 서명용 비밀 키
    /// * `expires_in_minutes` - 만료 시간 (분)
    /// * `clock` - 발급/만료 기준 시계
    pub fn new(secret: &SecretString, expires_in_minutes: i64, clock: Arc<dyn Clock>) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            expires_in_minutes,
            clock,
        }
    }

    /// 만료 시간 (초).
    pub fn expires_in_secs(&self) -> i64 {
        self.expires_in_minutes * 60
    }

    /// Claims 생성 및 인코딩.
    pub fn create_token(&self, user_id: i64, username: &str) -> Result<String, JwtError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expires_in_minutes)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(JwtError::from)
    }

    /// 토큰 디코딩 및 검증.
    ///
    /// 서명은 jsonwebtoken이, 만료는 주입된 시계로 확인합니다.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidToken => JwtError::InvalidToken,
                _ => JwtError::DecodingError,
            })?
            .claims;

        if self.clock.now().timestamp() > claims.exp {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: i64, username: &str) -> Result<String, AuthError> {
        self.create_token(user_id, username)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_core::FixedClock;
    use chrono::{TimeZone, Utc};

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    fn issuer() -> (JwtTokenIssuer, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ));
        let secret = SecretString::from(TEST_SECRET.to_string());
        (JwtTokenIssuer::new(&secret, 60, clock.clone()), clock)
    }

    #[test]
    fn test_create_and_decode_token() {
        let (issuer, clock) = issuer();

        let token = issuer.issue(7, "validuser1").unwrap();
        assert!(!token.is_empty());

        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.username, "validuser1");
        assert_eq!(claims.iat, clock.now().timestamp());
        assert_eq!(claims.exp - claims.iat, issuer.expires_in_secs());
    }

    #[test]
    fn test_each_token_has_unique_id() {
        let (issuer, _) = issuer();

        let a = issuer.decode(&issuer.issue(1, "alpha").unwrap()).unwrap();
        let b = issuer.decode(&issuer.issue(1, "alpha").unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_expired_token() {
        let (issuer, clock) = issuer();
        let token = issuer.issue(1, "alpha").unwrap();

        clock.advance(Duration::minutes(61));
        assert!(matches!(issuer.decode(&token), Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_invalid_token() {
        let (issuer, _) = issuer();
        assert!(issuer.decode("invalid.token.here").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let (issuer, clock) = issuer();
        let token = issuer.issue(1, "alpha").unwrap();

        let other = JwtTokenIssuer::new(
            &SecretString::from("wrong-secret-key-for-testing-minimum-32-chars".to_string()),
            60,
            clock,
        );
        assert!(other.decode(&token).is_err());
    }
}
