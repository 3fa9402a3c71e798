use serde::Serialize;
use crate::domain::entities::posts::comment::Comment;
use crate::domain::entities::posts::post::Post;

/// 게시글 응답 DTO
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    /// 작성자 사용자 ID
    pub author_id: String,
    /// 작성자 닉네임 (사용자가 삭제된 경우 null)
    pub author_nickname: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl PostResponse {
    pub fn from_post(post: Post, author_nickname: Option<String>) -> Self {
        Self {
            id: post.id_string().unwrap_or_default(),
            title: post.title,
            content: post.content,
            author_id: post.author_id.to_hex(),
            author_nickname,
            created_at: post.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: post.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 댓글 응답 DTO
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub author_nickname: Option<String>,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 게시글 통계 응답 (관리자 전용)
#[derive(Debug, Serialize)]
pub struct PostStatisticsResponse {
    /// 전체 게시글 수
    pub total_posts: u64,
    /// 전체 댓글 수
    pub total_comments: u64,
}

impl CommentResponse {
    pub fn from_comment(comment: Comment, author_nickname: Option<String>) -> Self {
        Self {
            id: comment.id_string().unwrap_or_default(),
            post_id: comment.post_id.to_hex(),
            author_id: comment.author_id.to_hex(),
            author_nickname,
            content: comment.content,
            created_at: comment.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: comment.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
