//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/v1/users` - 회원가입, 로그인, 내 계정 관리

pub mod health;
pub mod users;

pub use health::{health_router, ComponentStatus, HealthResponse};
pub use users::{
    users_router, ChangePasswordRequest, MessageResponse, SignUpResponse, WithdrawRequest,
};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/v1/users", users_router())
}
