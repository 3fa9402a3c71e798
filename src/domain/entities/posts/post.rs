//! Post Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시글 엔티티
///
/// 작성자는 `author_id`로만 참조하며, 작성자 닉네임 등 표시용 정보는
/// 응답 DTO를 만들 때 사용자 정보와 조합합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 게시글 제목
    pub title: String,
    /// 게시글 본문
    pub content: String,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Post {
    /// 새 게시글 생성
    pub fn new(title: String, content: String, author_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 사용자가 작성자인지 확인
    pub fn is_authored_by(&self, user_id: &ObjectId) -> bool {
        &self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_authored_by() {
        let author = ObjectId::new();
        let other = ObjectId::new();
        let post = Post::new("제목".to_string(), "내용".to_string(), author);

        assert!(post.is_authored_by(&author));
        assert!(!post.is_authored_by(&other));
    }
}
