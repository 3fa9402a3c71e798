//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 리프레시 토큰 저장소와
//! 조회 캐시로 사용합니다. 모든 리포지토리는 `new(...)` 생성자로
//! 의존성을 명시적으로 주입받아 `main`에서 한 번 조립됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone(), redis.clone());
//! let user = user_repo.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod users;
pub mod tokens;
pub mod posts;
