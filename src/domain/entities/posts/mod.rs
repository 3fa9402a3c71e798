//! Posts Entity Module
//!
//! 게시판 도메인의 엔티티들을 정의하는 모듈입니다.
//! 게시글(Post)과 댓글(Comment)은 ID 참조로만 연결됩니다.

pub mod post;
pub mod comment;
