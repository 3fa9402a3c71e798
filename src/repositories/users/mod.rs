//! # 사용자 리포지토리 모듈
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스와 Redis 캐싱을 담당합니다.

pub mod user_repo;

pub use user_repo::*;
