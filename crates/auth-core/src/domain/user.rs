//! 사용자 계정 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 역할.
///
/// 저장만 되며 이 시스템에서 권한 검사에 사용되지 않습니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// 일반 사용자 (기본값)
    #[default]
    User,
    /// 관리자
    Admin,
}

impl Role {
    /// 문자열에서 역할 파싱 (대소문자 무시).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// 저장 형식 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 등록된 사용자 계정.
///
/// `password_hash`는 항상 해시 값이며 평문이 저장되지 않습니다.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// 저장소가 부여한 식별자
    pub id: i64,
    /// 사용자 이름 (생성 후 불변)
    pub username: String,
    /// 비밀번호 해시 (PHC 문자열 등 불투명 값)
    pub password_hash: String,
    /// 역할
    pub role: Role,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 최종 수정 시각
    pub updated_at: DateTime<Utc>,
    /// 탈퇴(소프트 삭제) 시각
    pub removed_at: Option<DateTime<Utc>>,
}

impl User {
    /// 탈퇴하지 않은 사용자인지 확인.
    pub fn is_active(&self) -> bool {
        self.removed_at.is_none()
    }

    /// 비밀번호 해시 교체. `updated_at`이 함께 갱신됩니다.
    pub fn update_password(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.touch(now);
    }

    /// 소프트 삭제.
    pub fn remove(&mut self, now: DateTime<Utc>) {
        self.removed_at = Some(now);
        self.touch(now);
    }

    /// 외부 노출용 프로필.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            user_name: self.username.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }

    // updated_at >= created_at 불변식 유지
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("removed_at", &self.removed_at)
            .finish()
    }
}

/// 신규 사용자 입력 (식별자 부여 전).
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// 기본 역할(`USER`)로 신규 사용자 생성.
    pub fn new(username: impl Into<String>, password_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            password_hash,
            role: Role::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장소가 부여한 식별자로 `User` 생성.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
            removed_at: None,
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// 사용자 프로필 (해시 미포함).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub user_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
