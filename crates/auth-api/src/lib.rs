//! 회원가입/로그인 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - Argon2id 비밀번호 해싱과 HS256 JWT 발급
//! - PostgreSQL 사용자 저장소
//! - 헬스 체크 엔드포인트
//! - Prometheus 메트릭
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 해셔, 토큰 발급자, Bearer 추출기
//! - [`repository`]: PostgreSQL 저장소
//! - [`metrics`]: Prometheus 메트릭 수집
//! - [`middleware`]: HTTP 미들웨어
//! - [`openapi`]: OpenAPI 문서

pub mod auth;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

pub use auth::{Argon2PasswordHasher, Claims, JwtAuth, JwtAuthError, JwtTokenIssuer};
pub use error::{ApiErrorResponse, ApiResult};
pub use metrics::setup_metrics_recorder;
pub use middleware::metrics_layer;
pub use repository::PgUserStore;
pub use routes::*;
pub use state::AppState;
