//! OpenAPI 문서화 설정.
//!
//! utoipa로 생성한 OpenAPI 3 스펙을 `/api-docs/openapi.json`에서 제공합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::{routing::get, Json, Router};
use auth_core::{Credentials, Role, UserProfile};
use utoipa::OpenApi;

use crate::error::ApiErrorResponse;
use crate::routes::{
    ChangePasswordRequest, ComponentStatus, HealthResponse, MessageResponse, SignUpResponse,
    WithdrawRequest,
};

/// User Auth API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Auth API",
        description = r#"
# 회원가입/로그인 REST API

## 인증

로그인 성공 시 `Authorization: Bearer <token>` 헤더로 토큰이 반환됩니다.
`/api/v1/users/me` 하위 엔드포인트는 같은 헤더를 요구합니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "users", description = "사용자 - 회원가입, 로그인, 계정 관리"),
    ),
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentStatus,

            // ===== Common =====
            ApiErrorResponse,

            // ===== Users =====
            Credentials,
            Role,
            UserProfile,
            SignUpResponse,
            MessageResponse,
            ChangePasswordRequest,
            WithdrawRequest,
        )
    ),
    paths(
        // ===== Health =====
        crate::routes::health::health_check,
        crate::routes::health::health_ready,

        // ===== Users =====
        crate::routes::users::sign_up,
        crate::routes::users::login,
        crate::routes::users::me,
        crate::routes::users::change_password,
        crate::routes::users::withdraw,
    )
)]
pub struct ApiDoc;

/// OpenAPI JSON 라우터.
pub fn openapi_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
