//! 인증 시스템의 에러 타입.
//!
//! 모든 실패 경로는 호출자가 구분할 수 있는 에러 종류로 반환됩니다.

use thiserror::Error;

/// 인증 서비스 에러.
///
/// 메시지는 클라이언트에 그대로 노출되는 문구입니다.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 사용자 이름 형식 위반
    #[error("유효하지 않은 사용자 이름입니다.")]
    InvalidUsername,

    /// 비밀번호 형식 위반
    #[error("유효하지 않은 비밀번호입니다.")]
    InvalidPassword,

    /// 이미 사용 중인 사용자 이름
    #[error("이미 존재하는 이름입니다.")]
    DuplicateUsername,

    /// 활성 사용자 없음 (미가입 또는 탈퇴)
    #[error("사용자가 존재하지 않습니다.")]
    UserNotFound,

    /// 비밀번호 불일치
    #[error("잘못된 비밀번호입니다.")]
    InvalidCredentials,

    /// 저장소 접근 실패
    #[error("저장소를 사용할 수 없습니다: {0}")]
    StoreUnavailable(String),

    /// 해싱/토큰 발급 등 내부 처리 실패
    #[error("내부 에러: {0}")]
    Internal(String),
}

impl AuthError {
    /// 안정적인 에러 코드 반환.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidUsername => "INVALID_USERNAME",
            AuthError::InvalidPassword => "INVALID_PASSWORD",
            AuthError::DuplicateUsername => "DUPLICATE_USERNAME",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 클라이언트 입력 문제로 인한 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::StoreUnavailable(_) | AuthError::Internal(_))
    }
}

/// 사용자 저장소 에러.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 유일성 제약 위반 (활성 사용자 이름 중복)
    #[error("사용자 이름 중복")]
    Conflict,

    /// 갱신 대상 레코드 없음
    #[error("레코드를 찾을 수 없음")]
    NotFound,

    /// 연결 실패 등 저장소 장애
    #[error("저장소 장애: {0}")]
    Unavailable(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => AuthError::DuplicateUsername,
            StoreError::NotFound => AuthError::UserNotFound,
            StoreError::Unavailable(msg) => AuthError::StoreUnavailable(msg),
        }
    }
}

/// 인증 작업을 위한 Result 타입.
pub type AuthResult<T> = Result<T, AuthError>;
