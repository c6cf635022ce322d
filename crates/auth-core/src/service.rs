//! 회원가입/로그인 오케스트레이션.
//!
//! `AuthService`는 상태를 가지지 않으며 `Arc`로 공유되어
//! 여러 요청에서 동시에 호출될 수 있습니다.
//!
//! # 흐름
//!
//! - 회원가입: 형식 검증 → 중복 확인 → 해싱 → 저장
//! - 로그인: 조회 → 비밀번호 검증 → 토큰 발급

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::clock::Clock;
use crate::domain::{
    LoginResult, NewUser, PasswordHasher, SignUpResult, TokenIssuer, User, UserProfile, UserStore,
};
use crate::error::{AuthError, AuthResult};
use crate::validation::{validate_password, validate_username};

/// 인증 서비스.
///
/// 모든 협력자는 생성 시 명시적으로 주입됩니다.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    /// 새로운 AuthService 생성.
    ///
    /// # Arguments
    ///
    /// * `store` - 사용자 저장소
    /// * `hasher` - 비밀번호 해셔
    /// * `tokens` - Bearer 토큰 발급자
    /// * `clock` - 타임스탬프용 시계
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            clock,
        }
    }

    /// 사용자 저장소 참조.
    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    /// 회원가입.
    ///
    /// 사용자 이름을 먼저 검증하고, 그다음 비밀번호를 검증합니다.
    /// 사전 중복 확인을 통과하더라도 저장소의 유일성 제약 위반은
    /// `DuplicateUsername`으로 변환됩니다.
    ///
    /// # Errors
    ///
    /// - `InvalidUsername` / `InvalidPassword`: 형식 위반
    /// - `DuplicateUsername`: 활성 사용자 이름 중복
    /// - `StoreUnavailable`: 저장소 장애
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, username: &str, password: &str) -> AuthResult<SignUpResult> {
        validate_username(username)?;
        validate_password(password)?;

        if self.store.find_active_by_username(username).await?.is_some() {
            debug!("이미 존재하는 사용자 이름");
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = self.hash_password(password).await?;
        let user = self
            .store
            .insert(NewUser::new(username, password_hash, self.clock.now()))
            .await
            .map_err(AuthError::from)?;

        info!(user_id = user.id, "회원가입 완료");

        Ok(SignUpResult {
            id: user.id,
            username: user.username,
        })
    }

    /// 로그인.
    ///
    /// # Errors
    ///
    /// - `UserNotFound`: 활성 사용자 없음
    /// - `InvalidCredentials`: 비밀번호 불일치
    /// - `StoreUnavailable`: 저장소 장애
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<LoginResult> {
        let user = self.authenticate(username, password).await?;
        let token = self.tokens.issue(user.id, &user.username)?;

        info!(user_id = user.id, "로그인 성공");

        Ok(LoginResult {
            user_id: user.id,
            username: user.username,
            token,
        })
    }

    /// 비밀번호 변경.
    ///
    /// 현재 비밀번호 확인 후 새 비밀번호를 검증하고 해시를 교체합니다.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` / `InvalidCredentials`: 인증 실패
    /// - `InvalidPassword`: 새 비밀번호 형식 위반
    #[instrument(skip(self, current_password, new_password))]
    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<()> {
        let mut user = self.authenticate(username, current_password).await?;
        validate_password(new_password)?;

        let password_hash = self.hash_password(new_password).await?;
        user.update_password(password_hash, self.clock.now());
        self.store.update(&user).await?;

        info!(user_id = user.id, "비밀번호 변경 완료");
        Ok(())
    }

    /// 회원 탈퇴 (소프트 삭제).
    ///
    /// 탈퇴 후에는 로그인할 수 없으며, 같은 이름으로 다시 가입할 수 있습니다.
    #[instrument(skip(self, password))]
    pub async fn withdraw(&self, username: &str, password: &str) -> AuthResult<()> {
        let mut user = self.authenticate(username, password).await?;

        user.remove(self.clock.now());
        self.store.update(&user).await?;

        info!(user_id = user.id, "회원 탈퇴 완료");
        Ok(())
    }

    /// 활성 사용자 프로필 조회.
    pub async fn profile(&self, username: &str) -> AuthResult<UserProfile> {
        self.store
            .find_active_by_username(username)
            .await?
            .map(|user| user.profile())
            .ok_or(AuthError::UserNotFound)
    }

    async fn authenticate(&self, username: &str, password: &str) -> AuthResult<User> {
        let user = self
            .store
            .find_active_by_username(username)
            .await?
            .ok_or_else(|| {
                debug!("존재하지 않는 사용자");
                AuthError::UserNotFound
            })?;

        if !self.verify_password(password, &user.password_hash).await? {
            warn!(user_id = user.id, "비밀번호 불일치");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    // 해싱은 CPU 집약적이므로 blocking thread pool에서 실행
    async fn hash_password(&self, raw: &str) -> AuthResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let raw = raw.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&raw))
            .await
            .map_err(|e| AuthError::Internal(format!("해싱 태스크 실행 실패: {}", e)))?
    }

    async fn verify_password(&self, raw: &str, hashed: &str) -> AuthResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let raw = raw.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&raw, &hashed))
            .await
            .map_err(|e| AuthError::Internal(format!("검증 태스크 실행 실패: {}", e)))
    }
}
