//! 데이터베이스 저장소.

mod users;

pub use users::PgUserStore;
