//! Axum용 JWT 인증 추출기.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::jwt::{Claims, JwtError};
use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// JWT 인증 추출기.
///
/// `Authorization: Bearer <token>` 헤더를 검증하고 Claims를 꺼냅니다.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     JwtAuth(claims): JwtAuth,
/// ) -> impl IntoResponse {
///     format!("Authenticated user: {}", claims.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JwtAuth(pub Claims);

/// JWT 인증 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtAuthError {
    #[error("인증 토큰이 필요합니다")]
    MissingToken,
    #[error("잘못된 Authorization 헤더 형식")]
    InvalidAuthHeader,
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("유효하지 않은 토큰")]
    InvalidToken,
}

impl JwtAuthError {
    pub fn code(&self) -> &'static str {
        match self {
            JwtAuthError::MissingToken => "MISSING_TOKEN",
            JwtAuthError::InvalidAuthHeader => "INVALID_AUTH_HEADER",
            JwtAuthError::TokenExpired => "TOKEN_EXPIRED",
            JwtAuthError::InvalidToken => "INVALID_TOKEN",
        }
    }
}

impl IntoResponse for JwtAuthError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorResponse::new(self.code(), self.to_string()));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

impl FromRequestParts<Arc<AppState>> for JwtAuth {
    type Rejection = JwtAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(JwtAuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(JwtAuthError::InvalidAuthHeader)?;

        let claims = state.tokens.decode(token).map_err(|e| match e {
            JwtError::TokenExpired => JwtAuthError::TokenExpired,
            _ => JwtAuthError::InvalidToken,
        })?;

        Ok(JwtAuth(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn whoami(JwtAuth(claims): JwtAuth) -> String {
        claims.username
    }

    fn app(state: Arc<AppState>) -> Router {
        Router::new().route("/whoami", get(whoami)).with_state(state)
    }

    async fn call(app: Router, auth: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let state = Arc::new(AppState::for_tests());
        let token = state.tokens.create_token(1, "validuser1").unwrap();

        let (status, body) = call(app(state), Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "validuser1");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header() {
        let state = Arc::new(AppState::for_tests());

        let (status, body) = call(app(state.clone()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("MISSING_TOKEN"));

        let (status, body) = call(app(state.clone()), Some("Token abc")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("INVALID_AUTH_HEADER"));

        let (status, body) = call(app(state), Some("Bearer not.a.jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("INVALID_TOKEN"));
    }
}
