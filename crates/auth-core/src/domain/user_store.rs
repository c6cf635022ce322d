//! 사용자 저장소 추상화.

use async_trait::async_trait;

use super::{NewUser, User};
use crate::error::StoreError;

/// 사용자 저장소 trait.
///
/// 활성 사용자 이름의 유일성은 구현체가 보장해야 합니다.
/// 중복 삽입은 `StoreError::Conflict`로 보고합니다.
///
/// # 구현 예시
///
/// ```ignore
/// pub struct PgUserStore {
///     pool: PgPool,
/// }
///
/// #[async_trait]
/// impl UserStore for PgUserStore {
///     async fn find_active_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
///         // SELECT ... WHERE user_name = $1 AND removed_at IS NULL
///     }
///
///     // ... 나머지 메서드 구현
/// }
/// ```
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 탈퇴하지 않은 사용자를 이름으로 조회.
    async fn find_active_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// 신규 사용자 저장. 저장소가 식별자를 부여합니다.
    ///
    /// # Errors
    ///
    /// - `StoreError::Conflict`: 같은 이름의 활성 사용자가 이미 존재
    /// - `StoreError::Unavailable`: 저장소 장애
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// 활성 사용자의 가변 필드(해시, 수정 시각, 탈퇴 시각) 갱신.
    ///
    /// 이미 탈퇴한 사용자는 갱신하지 않으므로 오래된 스냅샷이
    /// 탈퇴를 되돌릴 수 없습니다.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound`: 해당 식별자의 활성 사용자가 없음
    /// - `StoreError::Unavailable`: 저장소 장애
    async fn update(&self, user: &User) -> Result<(), StoreError>;

    /// 저장소 연결 상태 확인.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
