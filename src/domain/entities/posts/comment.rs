//! Comment Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 댓글이 달린 게시글 ID
    pub post_id: ObjectId,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    /// 댓글 내용
    pub content: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Comment {
    /// 새 댓글 생성
    pub fn new(post_id: ObjectId, author_id: ObjectId, content: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            post_id,
            author_id,
            content,
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
