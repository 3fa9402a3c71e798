//! # 게시글 리포지토리 구현
//!
//! 게시글(`posts`)과 댓글(`comments`) 컬렉션의 데이터 액세스를 담당합니다.
//! 게시글 목록은 작성일 내림차순으로 페이징되며, 키워드 검색은
//! 제목/본문에 대한 대소문자 무시 부분 일치로 동작합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};

use crate::{
    db::Database,
    domain::entities::posts::{comment::Comment, post::Post},
    errors::errors::AppError,
};

/// 테스트 전용 인메모리 저장 상태
#[cfg(test)]
#[derive(Default)]
struct MemoryStore {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

/// 게시글/댓글 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct PostRepository {
    db: Arc<Database>,
    /// 테스트 전용 인메모리 백엔드. `Some`이면 MongoDB 대신 사용됩니다.
    #[cfg(test)]
    memory: Option<Arc<std::sync::Mutex<MemoryStore>>>,
}

impl PostRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            #[cfg(test)]
            memory: None,
        }
    }

    /// 테스트용 인메모리 리포지토리 생성자
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            db: Arc::new(Database::offline_for_tests()),
            memory: Some(Arc::new(std::sync::Mutex::new(MemoryStore::default()))),
        }
    }

    fn posts(&self) -> Collection<Post> {
        self.db.get_database().collection::<Post>("posts")
    }

    fn comments(&self) -> Collection<Comment> {
        self.db.get_database().collection::<Comment>("comments")
    }

    /// 키워드 검색 필터 생성
    ///
    /// 정규식 메타 문자는 이스케이프하여 리터럴 부분 일치로만 검색합니다.
    fn keyword_filter(keyword: Option<&str>) -> Document {
        match keyword {
            Some(keyword) if !keyword.trim().is_empty() => {
                let escaped = escape_regex(keyword.trim());
                let pattern = doc! { "$regex": &escaped, "$options": "i" };
                doc! {
                    "$or": [
                        { "title": pattern.clone() },
                        { "content": pattern },
                    ]
                }
            }
            _ => doc! {},
        }
    }

    /// 인메모리 백엔드의 키워드 부분 일치 (대소문자 무시)
    #[cfg(test)]
    fn keyword_matches(post: &Post, keyword: Option<&str>) -> bool {
        match keyword {
            Some(keyword) if !keyword.trim().is_empty() => {
                let needle = keyword.trim().to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    pub async fn insert(&self, mut post: Post) -> Result<Post, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            post.id = Some(ObjectId::new());
            store.lock().unwrap().posts.push(post.clone());
            return Ok(post);
        }

        let result = self
            .posts()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = result.inserted_id.as_object_id();
        Ok(post)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = parse_id(id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .posts
                .iter()
                .find(|p| p.id == Some(object_id))
                .cloned());
        }

        self.posts()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시글 페이지 조회 (작성일 내림차순, 키워드 선택)
    pub async fn find_page(
        &self,
        page: u64,
        size: u64,
        keyword: Option<&str>,
    ) -> Result<Vec<Post>, AppError> {
        let skip = (page.saturating_sub(1)) * size;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut posts: Vec<Post> = store
                .lock()
                .unwrap()
                .posts
                .iter()
                .filter(|p| Self::keyword_matches(p, keyword))
                .cloned()
                .collect();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            return Ok(posts
                .into_iter()
                .skip(skip as usize)
                .take(size as usize)
                .collect());
        }

        let cursor = self
            .posts()
            .find(Self::keyword_filter(keyword))
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 키워드 조건에 맞는 게시글 수
    pub async fn count(&self, keyword: Option<&str>) -> Result<u64, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .posts
                .iter()
                .filter(|p| Self::keyword_matches(p, keyword))
                .count() as u64);
        }

        self.posts()
            .count_documents(Self::keyword_filter(keyword))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 인기 게시글 페이지 조회 (댓글 많은 순, 동률이면 작성일 내림차순)
    ///
    /// 댓글 수는 저장하지 않고 조회 시점에 `$lookup`으로 집계합니다.
    pub async fn find_popular(&self, page: u64, size: u64) -> Result<Vec<Post>, AppError> {
        let skip = (page.saturating_sub(1)) * size;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let store = store.lock().unwrap();
            let mut ranked: Vec<(usize, Post)> = store
                .posts
                .iter()
                .map(|p| {
                    let count = store.comments.iter().filter(|c| Some(c.post_id) == p.id).count();
                    (count, p.clone())
                })
                .collect();
            ranked.sort_by(|a, b| {
                b.0.cmp(&a.0).then(b.1.created_at.cmp(&a.1.created_at))
            });
            return Ok(ranked
                .into_iter()
                .skip(skip as usize)
                .take(size as usize)
                .map(|(_, post)| post)
                .collect());
        }

        let pipeline = vec![
            doc! { "$lookup": {
                "from": "comments",
                "localField": "_id",
                "foreignField": "post_id",
                "as": "comments",
            } },
            doc! { "$addFields": { "comment_count": { "$size": "$comments" } } },
            doc! { "$sort": { "comment_count": -1, "created_at": -1 } },
            doc! { "$skip": skip as i64 },
            doc! { "$limit": size as i64 },
            doc! { "$project": { "comments": 0, "comment_count": 0 } },
        ];

        let cursor = self
            .posts()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents
            .into_iter()
            .map(|document| {
                mongodb::bson::from_document(document)
                    .map_err(|e| AppError::DatabaseError(e.to_string()))
            })
            .collect()
    }

    /// 작성자의 게시글 페이지 조회 (작성일 내림차순)
    pub async fn find_by_author(
        &self,
        author_id: &ObjectId,
        page: u64,
        size: u64,
    ) -> Result<Vec<Post>, AppError> {
        let skip = (page.saturating_sub(1)) * size;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut posts: Vec<Post> = store
                .lock()
                .unwrap()
                .posts
                .iter()
                .filter(|p| &p.author_id == author_id)
                .cloned()
                .collect();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            return Ok(posts
                .into_iter()
                .skip(skip as usize)
                .take(size as usize)
                .collect());
        }

        let cursor = self
            .posts()
            .find(doc! { "author_id": *author_id })
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 작성자의 게시글 수
    pub async fn count_by_author(&self, author_id: &ObjectId) -> Result<u64, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .posts
                .iter()
                .filter(|p| &p.author_id == author_id)
                .count() as u64);
        }

        self.posts()
            .count_documents(doc! { "author_id": *author_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시글 부분 수정 후 최신 문서 반환
    pub async fn update(
        &self,
        id: &str,
        mut fields: Document,
    ) -> Result<Option<Post>, AppError> {
        let object_id = parse_id(id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut store = store.lock().unwrap();
            match store.posts.iter_mut().find(|p| p.id == Some(object_id)) {
                Some(post) => {
                    if let Ok(title) = fields.get_str("title") {
                        post.title = title.to_string();
                    }
                    if let Ok(content) = fields.get_str("content") {
                        post.content = content.to_string();
                    }
                    post.updated_at = mongodb::bson::DateTime::now();
                    return Ok(Some(post.clone()));
                }
                None => return Ok(None),
            }
        }

        fields.insert("updated_at", mongodb::bson::DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.posts()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시글과 딸린 댓글을 함께 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_id(id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut store = store.lock().unwrap();
            let before = store.posts.len();
            store.posts.retain(|p| p.id != Some(object_id));
            if store.posts.len() == before {
                return Ok(false);
            }
            store.comments.retain(|c| c.post_id != object_id);
            return Ok(true);
        }

        let result = self
            .posts()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        self.comments()
            .delete_many(doc! { "post_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(true)
    }

    pub async fn insert_comment(&self, mut comment: Comment) -> Result<Comment, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            comment.id = Some(ObjectId::new());
            store.lock().unwrap().comments.push(comment.clone());
            return Ok(comment);
        }

        let result = self
            .comments()
            .insert_one(&comment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        comment.id = result.inserted_id.as_object_id();
        Ok(comment)
    }

    pub async fn find_comment_by_id(&self, id: &str) -> Result<Option<Comment>, AppError> {
        let object_id = parse_id(id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .comments
                .iter()
                .find(|c| c.id == Some(object_id))
                .cloned());
        }

        self.comments()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시글의 댓글 전체 조회 (작성일 오름차순)
    pub async fn find_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>, AppError> {
        let object_id = parse_id(post_id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut comments: Vec<Comment> = store
                .lock()
                .unwrap()
                .comments
                .iter()
                .filter(|c| c.post_id == object_id)
                .cloned()
                .collect();
            comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            return Ok(comments);
        }

        let cursor = self
            .comments()
            .find(doc! { "post_id": object_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 작성자의 댓글 페이지 조회 (작성일 내림차순)
    pub async fn find_comments_by_author(
        &self,
        author_id: &ObjectId,
        page: u64,
        size: u64,
    ) -> Result<Vec<Comment>, AppError> {
        let skip = (page.saturating_sub(1)) * size;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut comments: Vec<Comment> = store
                .lock()
                .unwrap()
                .comments
                .iter()
                .filter(|c| &c.author_id == author_id)
                .cloned()
                .collect();
            comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            return Ok(comments
                .into_iter()
                .skip(skip as usize)
                .take(size as usize)
                .collect());
        }

        let cursor = self
            .comments()
            .find(doc! { "author_id": *author_id })
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 작성자의 댓글 수
    pub async fn count_comments_by_author(&self, author_id: &ObjectId) -> Result<u64, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .comments
                .iter()
                .filter(|c| &c.author_id == author_id)
                .count() as u64);
        }

        self.comments()
            .count_documents(doc! { "author_id": *author_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 댓글 수
    pub async fn count_comments(&self) -> Result<u64, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store.lock().unwrap().comments.len() as u64);
        }

        self.comments()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 댓글 내용 수정 후 최신 문서 반환
    pub async fn update_comment(
        &self,
        id: &str,
        content: &str,
    ) -> Result<Option<Comment>, AppError> {
        let object_id = parse_id(id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut store = store.lock().unwrap();
            match store.comments.iter_mut().find(|c| c.id == Some(object_id)) {
                Some(comment) => {
                    comment.content = content.to_string();
                    comment.updated_at = mongodb::bson::DateTime::now();
                    return Ok(Some(comment.clone()));
                }
                None => return Ok(None),
            }
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.comments()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "content": content,
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete_comment(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_id(id)?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut store = store.lock().unwrap();
            let before = store.comments.len();
            store.comments.retain(|c| c.id != Some(object_id));
            return Ok(store.comments.len() < before);
        }

        let result = self
            .comments()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 정규식 메타 문자 이스케이프
fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(
            ch,
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("서울 여행"), "서울 여행");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(test)"), "\\(test\\)");
    }

    #[test]
    fn test_keyword_filter_empty() {
        assert_eq!(PostRepository::keyword_filter(None), doc! {});
        assert_eq!(PostRepository::keyword_filter(Some("   ")), doc! {});
    }

    #[test]
    fn test_keyword_filter_builds_or_clause() {
        let filter = PostRepository::keyword_filter(Some("제주"));
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("not-an-object-id").is_err());
        assert!(parse_id("507f1f77bcf86cd799439011").is_ok());
    }
}
