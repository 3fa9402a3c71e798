//! # 게시글 리포지토리 모듈
//!
//! 게시글과 댓글의 MongoDB 데이터 액세스를 담당합니다.

pub mod post_repo;

pub use post_repo::*;
