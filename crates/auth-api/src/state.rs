//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.

use std::sync::Arc;

use auth_core::{
    AuthService, Clock, InMemoryUserStore, JwtConfig, SystemClock, UserStore,
};

use crate::auth::{Argon2PasswordHasher, JwtTokenIssuer};

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 회원가입/로그인 서비스
    pub auth: Arc<AuthService>,

    /// JWT 발급자 (Bearer 추출기에서 검증에 사용)
    pub tokens: Arc<JwtTokenIssuer>,

    /// 저장소 종류 ("postgres" | "memory")
    pub storage: &'static str,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    ///
    /// 저장소, Argon2 해셔, JWT 발급자, 시계를 조립하여 `AuthService`를 만듭니다.
    ///
    /// # 인자
    /// * `store` - 사용자 저장소
    /// * `storage` - 헬스 체크에 표시할 저장소 종류
    /// * `jwt` - JWT 설정
    /// * `clock` - 타임스탬프용 시계
    pub fn new(
        store: Arc<dyn UserStore>,
        storage: &'static str,
        jwt: &JwtConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let tokens = Arc::new(JwtTokenIssuer::new(
            &jwt.secret_or_default(),
            jwt.expires_in_minutes,
            clock.clone(),
        ));

        let auth = AuthService::new(
            store,
            Arc::new(Argon2PasswordHasher::new()),
            tokens.clone(),
            clock,
        );

        Self {
            auth: Arc::new(auth),
            tokens,
            storage,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 인메모리 저장소와 시스템 시계로 구성된 상태.
    pub fn in_memory(jwt: &JwtConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            "memory",
            jwt,
            Arc::new(SystemClock),
        )
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }

    /// 저장소 연결 상태 확인.
    pub async fn is_store_healthy(&self) -> bool {
        self.auth.store().ping().await.is_ok()
    }
}

/// 테스트용 AppState 생성 헬퍼.
///
/// 고정된 비밀 키와 인메모리 저장소를 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
impl AppState {
    pub fn for_tests() -> Self {
        Self::in_memory(&JwtConfig {
            secret: Some(secrecy::SecretString::from(
                "test-secret-key-for-jwt-testing-minimum-32-chars",
            )),
            expires_in_minutes: 60,
        })
    }
}
