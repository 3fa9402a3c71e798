//! 게시판 서비스 모듈
//!
//! 게시글/댓글의 작성, 조회, 수정, 삭제 비즈니스 로직을 담당합니다.

pub mod post_service;

pub use post_service::*;
