use serde::Deserialize;
use validator::Validate;

/// 게시글 작성 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "내용은 1-20000자 사이여야 합니다"))]
    pub content: String,
}

/// 게시글 수정 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "내용은 1-20000자 사이여야 합니다"))]
    pub content: String,
}

/// 댓글 작성/수정 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, max = 1000, message = "댓글은 1-1000자 사이여야 합니다"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_rejected() {
        let request = CreatePostRequest {
            title: String::new(),
            content: "내용".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_post_request() {
        let request = CreatePostRequest {
            title: "제주 여행 후기".to_string(),
            content: "좋았습니다".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
