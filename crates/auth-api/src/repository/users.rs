//! Users Repository
//!
//! PostgreSQL 기반 `UserStore` 구현. 활성 사용자 이름의 유일성은
//! `users_active_user_name_key` 부분 유니크 인덱스가 보장합니다.

use async_trait::async_trait;
use auth_core::{NewUser, Role, StoreError, User, UserStore};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{info, warn};

// ================================================================================================
// Types
// ================================================================================================

/// users 테이블 레코드
#[derive(Debug, Clone, FromRow)]
struct UserRecord {
    id: i64,
    user_name: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[sqlx(default)]
    removed_at: Option<DateTime<Utc>>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let role = Role::parse(&record.role).unwrap_or_else(|| {
            warn!(user_id = record.id, role = %record.role, "알 수 없는 역할, USER로 처리");
            Role::User
        });

        User {
            id: record.id,
            username: record.user_name,
            password_hash: record.password_hash,
            role,
            created_at: record.created_at,
            updated_at: record.updated_at,
            removed_at: record.removed_at,
        }
    }
}

fn map_db_error(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::Conflict;
        }
    }
    StoreError::Unavailable(e.to_string())
}

// ================================================================================================
// Repository
// ================================================================================================

/// PostgreSQL 사용자 저장소
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 마이그레이션 실행.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        info!("Migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_active_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, user_name, password_hash, role, created_at, updated_at, removed_at
            FROM users
            WHERE user_name = $1 AND removed_at IS NULL
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(record.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (user_name, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_name, password_hash, role, created_at, updated_at, removed_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(record.into())
    }

    async fn update(&self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = $3, removed_at = $4
            WHERE id = $1 AND removed_at IS NULL
            "#,
        )
        .bind(user.id)
        .bind(&user.password_hash)
        .bind(user.updated_at)
        .bind(user.removed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
