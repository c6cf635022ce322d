//! API 에러 응답 타입.
//!
//! 모든 엔드포인트에서 `{code, message}` 형식의 에러 본문을 사용합니다.

use axum::{http::StatusCode, Json};
use auth_core::AuthError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "DUPLICATE_USERNAME",
///   "message": "이미 존재하는 이름입니다.",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_USERNAME", "USER_NOT_FOUND")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 에러 발생 타임스탬프 (Unix timestamp, 선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 인증 에러의 HTTP 상태 코드.
pub fn status_for(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidUsername | AuthError::InvalidPassword | AuthError::DuplicateUsername => {
            StatusCode::BAD_REQUEST
        }
        AuthError::UserNotFound | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 인증 에러를 API 에러 응답으로 변환합니다.
///
/// 서버 측 에러의 상세 원인은 로그에만 남기고 클라이언트에는 일반 문구를 보냅니다.
pub fn auth_error(err: AuthError) -> (StatusCode, Json<ApiErrorResponse>) {
    let status = status_for(&err);

    let message = match &err {
        AuthError::StoreUnavailable(cause) => {
            tracing::error!(%cause, "저장소 접근 실패");
            "일시적으로 서비스를 사용할 수 없습니다.".to_string()
        }
        AuthError::Internal(cause) => {
            tracing::error!(%cause, "내부 처리 실패");
            "요청을 처리하지 못했습니다.".to_string()
        }
        _ => err.to_string(),
    };

    (status, Json(ApiErrorResponse::new(err.code(), message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&AuthError::InvalidUsername), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&AuthError::DuplicateUsername), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&AuthError::UserNotFound), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(&AuthError::StoreUnavailable("down".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&AuthError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_body() {
        let (status, Json(body)) = auth_error(AuthError::DuplicateUsername);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "DUPLICATE_USERNAME");
        assert_eq!(body.message, "이미 존재하는 이름입니다.");

        // 내부 원인은 노출하지 않음
        let (_, Json(body)) = auth_error(AuthError::StoreUnavailable("pool timed out".into()));
        assert_eq!(body.code, "STORE_UNAVAILABLE");
        assert!(!body.message.contains("pool"));
    }
}
