//! 회원가입/로그인 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/users/sign-up` - 회원가입
//! - `POST /api/v1/users/login` - 로그인 (`Authorization` 헤더로 토큰 반환)
//! - `GET /api/v1/users/me` - 내 프로필
//! - `PUT /api/v1/users/me/password` - 비밀번호 변경
//! - `DELETE /api/v1/users/me` - 회원 탈퇴

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::AUTHORIZATION,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use auth_core::{AuthError, Credentials, UserProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::{Claims, JwtAuth};
use crate::error::{auth_error, ApiErrorResponse, ApiResult};
use crate::metrics::{record_login, record_sign_up};
use crate::state::AppState;

const SIGN_UP_SUCCESS: &str = "회원가입에 성공했습니다.";
const LOGIN_SUCCESS: &str = "로그인에 성공했습니다.";
const PASSWORD_CHANGED: &str = "비밀번호가 변경되었습니다.";
const WITHDRAWN: &str = "회원 탈퇴가 완료되었습니다.";

// ==================== 요청/응답 타입 ====================

/// 회원가입 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: String,
    pub id: i64,
    pub user_name: String,
}

/// 메시지만 담는 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// 비밀번호 변경 요청.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// 회원 탈퇴 요청.
#[derive(Deserialize, ToSchema)]
pub struct WithdrawRequest {
    pub password: String,
}

// ==================== 핸들러 ====================

/// 회원가입.
#[utoipa::path(
    post,
    path = "/api/v1/users/sign-up",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "회원가입 성공", body = SignUpResponse),
        (status = 400, description = "형식 위반 또는 중복 이름", body = ApiErrorResponse),
        (status = 503, description = "저장소 장애", body = ApiErrorResponse)
    )
)]
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<SignUpResponse>> {
    let result = state
        .auth
        .sign_up(&credentials.user_name, &credentials.password)
        .await;

    match result {
        Ok(signed) => {
            record_sign_up("success");
            Ok(Json(SignUpResponse {
                message: SIGN_UP_SUCCESS.to_string(),
                id: signed.id,
                user_name: signed.username,
            }))
        }
        Err(e) => {
            record_sign_up(e.code());
            Err(auth_error(e))
        }
    }
}

/// 로그인.
///
/// 성공 시 `Authorization: Bearer <token>` 헤더로 토큰을 반환합니다.
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "로그인 성공 (Authorization 헤더에 토큰)", body = MessageResponse),
        (status = 401, description = "사용자 없음 또는 비밀번호 불일치", body = ApiErrorResponse),
        (status = 503, description = "저장소 장애", body = ApiErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<impl IntoResponse> {
    let result = state
        .auth
        .login(&credentials.user_name, &credentials.password)
        .await;

    match result {
        Ok(login) => {
            record_login("success");
            Ok((
                [(AUTHORIZATION, format!("Bearer {}", login.token))],
                MessageResponse::new(LOGIN_SUCCESS),
            ))
        }
        Err(e) => {
            record_login(e.code());
            Err(auth_error(e))
        }
    }
}

/// 내 프로필 조회.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    responses(
        (status = 200, description = "프로필", body = UserProfile),
        (status = 401, description = "토큰 없음/무효 또는 탈퇴한 사용자", body = ApiErrorResponse)
    )
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    JwtAuth(claims): JwtAuth,
) -> ApiResult<Json<UserProfile>> {
    current_profile(&state, &claims).await.map(Json)
}

/// 비밀번호 변경.
#[utoipa::path(
    put,
    path = "/api/v1/users/me/password",
    tag = "users",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "변경 완료", body = MessageResponse),
        (status = 400, description = "새 비밀번호 형식 위반", body = ApiErrorResponse),
        (status = 401, description = "현재 비밀번호 불일치", body = ApiErrorResponse)
    )
)]
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    JwtAuth(claims): JwtAuth,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    current_profile(&state, &claims).await?;

    state
        .auth
        .change_password(&claims.username, &req.current_password, &req.new_password)
        .await
        .map_err(auth_error)?;

    Ok(MessageResponse::new(PASSWORD_CHANGED))
}

/// 회원 탈퇴.
#[utoipa::path(
    delete,
    path = "/api/v1/users/me",
    tag = "users",
    request_body = WithdrawRequest,
    responses(
        (status = 200, description = "탈퇴 완료", body = MessageResponse),
        (status = 401, description = "비밀번호 불일치", body = ApiErrorResponse)
    )
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    JwtAuth(claims): JwtAuth,
    Json(req): Json<WithdrawRequest>,
) -> ApiResult<Json<MessageResponse>> {
    current_profile(&state, &claims).await?;

    state
        .auth
        .withdraw(&claims.username, &req.password)
        .await
        .map_err(auth_error)?;

    Ok(MessageResponse::new(WITHDRAWN))
}

/// 토큰의 사용자 이름에 해당하는 활성 사용자.
///
/// 탈퇴 후 같은 이름으로 재가입한 계정은 이전 토큰으로 접근할 수 없습니다.
async fn current_profile(
    state: &AppState,
    claims: &Claims,
) -> ApiResult<UserProfile> {
    let profile = state
        .auth
        .profile(&claims.username)
        .await
        .map_err(auth_error)?;

    if claims.user_id() != Some(profile.id) {
        return Err(auth_error(AuthError::UserNotFound));
    }

    Ok(profile)
}

/// 사용자 라우터 생성.
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/login", post(login))
        .route("/me", get(me).delete(withdraw))
        .route("/me/password", put(change_password))
}
