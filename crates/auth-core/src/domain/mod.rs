//! 회원 인증을 위한 도메인 모델과 협력자 인터페이스.

mod credentials;
mod security;
mod user;
mod user_store;

pub use credentials::*;
pub use security::*;
pub use user::*;
pub use user_store::*;
