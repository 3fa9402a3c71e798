//! # 게시판 서비스 구현
//!
//! 게시글/댓글의 CRUD와 작성자 권한 검사를 담당합니다.
//!
//! ## 권한 정책
//!
//! - 작성은 인증된 사용자 누구나
//! - 수정은 작성자 본인만
//! - 삭제는 작성자 본인 또는 관리자

use mongodb::bson::{doc, oid::ObjectId};

use crate::{
    domain::{
        dto::posts::request::{CommentRequest, CreatePostRequest, UpdatePostRequest},
        dto::posts::response::{CommentResponse, PostResponse, PostStatisticsResponse},
        dto::common::PageResponse,
        entities::posts::{comment::Comment, post::Post},
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::errors::AppError,
    repositories::{posts::post_repo::PostRepository, users::user_repo::UserRepository},
};

/// 게시판 비즈니스 로직 서비스
#[derive(Clone)]
pub struct PostService {
    post_repo: PostRepository,
    user_repo: UserRepository,
}

impl PostService {
    pub fn new(post_repo: PostRepository, user_repo: UserRepository) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }

    /// 게시글 작성
    pub async fn create_post(
        &self,
        user: &AuthenticatedUser,
        request: CreatePostRequest,
    ) -> Result<PostResponse, AppError> {
        let author_id = parse_user_id(&user.user_id)?;

        let post = Post::new(request.title, request.content, author_id);
        let created = self.post_repo.insert(post).await?;

        let nickname = self.nickname_of(&author_id).await;
        Ok(PostResponse::from_post(created, nickname))
    }

    /// 게시글 단건 조회
    pub async fn get_post(&self, post_id: &str) -> Result<PostResponse, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))?;

        let nickname = self.nickname_of(&post.author_id).await;
        Ok(PostResponse::from_post(post, nickname))
    }

    /// 게시글 목록 페이지 조회 (키워드 검색 선택)
    pub async fn list_posts(
        &self,
        page: u64,
        size: u64,
        keyword: Option<&str>,
    ) -> Result<PageResponse<PostResponse>, AppError> {
        let posts = self.post_repo.find_page(page, size, keyword).await?;
        let total = self.post_repo.count(keyword).await?;

        let mut items = Vec::with_capacity(posts.len());
        for post in posts {
            let nickname = self.nickname_of(&post.author_id).await;
            items.push(PostResponse::from_post(post, nickname));
        }

        Ok(PageResponse::new(items, page, size, total))
    }

    /// 인기 게시글 페이지 조회 (댓글 많은 순)
    ///
    /// 전체 목록과 같은 페이지 응답 형태를 사용하며,
    /// 정렬 기준만 댓글 수 내림차순으로 바뀝니다.
    pub async fn popular_posts(
        &self,
        page: u64,
        size: u64,
    ) -> Result<PageResponse<PostResponse>, AppError> {
        let posts = self.post_repo.find_popular(page, size).await?;
        let total = self.post_repo.count(None).await?;

        let mut items = Vec::with_capacity(posts.len());
        for post in posts {
            let nickname = self.nickname_of(&post.author_id).await;
            items.push(PostResponse::from_post(post, nickname));
        }

        Ok(PageResponse::new(items, page, size, total))
    }

    /// 특정 사용자가 작성한 게시글 페이지 조회 (작성일 내림차순)
    pub async fn list_posts_by_author(
        &self,
        user: &AuthenticatedUser,
        page: u64,
        size: u64,
    ) -> Result<PageResponse<PostResponse>, AppError> {
        let author_id = parse_user_id(&user.user_id)?;

        let posts = self.post_repo.find_by_author(&author_id, page, size).await?;
        let total = self.post_repo.count_by_author(&author_id).await?;

        let nickname = self.nickname_of(&author_id).await;
        let items = posts
            .into_iter()
            .map(|post| PostResponse::from_post(post, nickname.clone()))
            .collect();

        Ok(PageResponse::new(items, page, size, total))
    }

    /// 특정 사용자가 작성한 댓글 페이지 조회 (작성일 내림차순)
    pub async fn list_comments_by_author(
        &self,
        user: &AuthenticatedUser,
        page: u64,
        size: u64,
    ) -> Result<PageResponse<CommentResponse>, AppError> {
        let author_id = parse_user_id(&user.user_id)?;

        let comments = self
            .post_repo
            .find_comments_by_author(&author_id, page, size)
            .await?;
        let total = self.post_repo.count_comments_by_author(&author_id).await?;

        let nickname = self.nickname_of(&author_id).await;
        let items = comments
            .into_iter()
            .map(|comment| CommentResponse::from_comment(comment, nickname.clone()))
            .collect();

        Ok(PageResponse::new(items, page, size, total))
    }

    /// 게시글/댓글 통계 (관리자 전용)
    pub async fn statistics(&self) -> Result<PostStatisticsResponse, AppError> {
        let total_posts = self.post_repo.count(None).await?;
        let total_comments = self.post_repo.count_comments().await?;

        Ok(PostStatisticsResponse {
            total_posts,
            total_comments,
        })
    }

    /// 게시글 수정 (작성자 본인만)
    pub async fn update_post(
        &self,
        user: &AuthenticatedUser,
        post_id: &str,
        request: UpdatePostRequest,
    ) -> Result<PostResponse, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))?;

        let requester = parse_user_id(&user.user_id)?;
        if !post.is_authored_by(&requester) {
            return Err(AppError::AuthorizationError(
                "게시글 작성자만 수정할 수 있습니다".to_string(),
            ));
        }

        let updated = self
            .post_repo
            .update(
                post_id,
                doc! { "title": &request.title, "content": &request.content },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))?;

        let nickname = self.nickname_of(&updated.author_id).await;
        Ok(PostResponse::from_post(updated, nickname))
    }

    /// 게시글 삭제 (작성자 본인 또는 관리자)
    ///
    /// 딸린 댓글도 함께 삭제됩니다.
    pub async fn delete_post(
        &self,
        user: &AuthenticatedUser,
        post_id: &str,
    ) -> Result<(), AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))?;

        let requester = parse_user_id(&user.user_id)?;
        if !post.is_authored_by(&requester) && !user.is_admin() {
            return Err(AppError::AuthorizationError(
                "게시글을 삭제할 권한이 없습니다".to_string(),
            ));
        }

        self.post_repo.delete(post_id).await?;
        Ok(())
    }

    /// 댓글 작성
    pub async fn add_comment(
        &self,
        user: &AuthenticatedUser,
        post_id: &str,
        request: CommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))?;

        let author_id = parse_user_id(&user.user_id)?;
        let post_oid = post
            .id
            .ok_or_else(|| AppError::InternalError("게시글 ID가 없습니다".to_string()))?;

        let comment = Comment::new(post_oid, author_id, request.content);
        let created = self.post_repo.insert_comment(comment).await?;

        let nickname = self.nickname_of(&author_id).await;
        Ok(CommentResponse::from_comment(created, nickname))
    }

    /// 게시글의 댓글 목록 조회 (작성일 오름차순)
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<CommentResponse>, AppError> {
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound("게시글을 찾을 수 없습니다".to_string()));
        }

        let comments = self.post_repo.find_comments_by_post(post_id).await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let nickname = self.nickname_of(&comment.author_id).await;
            responses.push(CommentResponse::from_comment(comment, nickname));
        }

        Ok(responses)
    }

    /// 댓글 수정 (작성자 본인만)
    pub async fn update_comment(
        &self,
        user: &AuthenticatedUser,
        comment_id: &str,
        request: CommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let comment = self
            .post_repo
            .find_comment_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))?;

        let requester = parse_user_id(&user.user_id)?;
        if !comment.is_authored_by(&requester) {
            return Err(AppError::AuthorizationError(
                "댓글 작성자만 수정할 수 있습니다".to_string(),
            ));
        }

        let updated = self
            .post_repo
            .update_comment(comment_id, &request.content)
            .await?
            .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))?;

        let nickname = self.nickname_of(&updated.author_id).await;
        Ok(CommentResponse::from_comment(updated, nickname))
    }

    /// 댓글 삭제 (작성자 본인 또는 관리자)
    pub async fn delete_comment(
        &self,
        user: &AuthenticatedUser,
        comment_id: &str,
    ) -> Result<(), AppError> {
        let comment = self
            .post_repo
            .find_comment_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))?;

        let requester = parse_user_id(&user.user_id)?;
        if !comment.is_authored_by(&requester) && !user.is_admin() {
            return Err(AppError::AuthorizationError(
                "댓글을 삭제할 권한이 없습니다".to_string(),
            ));
        }

        self.post_repo.delete_comment(comment_id).await?;
        Ok(())
    }

    /// 작성자 닉네임 조회 (실패해도 응답은 계속 만든다)
    async fn nickname_of(&self, author_id: &ObjectId) -> Option<String> {
        self.user_repo
            .find_by_id(&author_id.to_hex())
            .await
            .ok()
            .flatten()
            .map(|user| user.nickname)
    }
}

fn parse_user_id(user_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(user_id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID입니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::entities::users::user::Role;

    #[test]
    fn test_parse_user_id() {
        assert!(parse_user_id("507f1f77bcf86cd799439011").is_ok());
        assert!(matches!(
            parse_user_id("bad-id"),
            Err(AppError::ValidationError(_))
        ));
    }

    // 인메모리 저장소 기반 테스트 픽스처
    fn service() -> (PostService, UserRepository) {
        let user_repo = UserRepository::in_memory();
        let service = PostService::new(PostRepository::in_memory(), user_repo.clone());
        (service, user_repo)
    }

    async fn register_user(user_repo: &UserRepository, nickname: &str) -> AuthenticatedUser {
        let user = user_repo
            .create(crate::domain::entities::users::user::User::new_oauth(
                None,
                nickname.to_string(),
                AuthProvider::Google,
                format!("google-{}", nickname),
                None,
            ))
            .await
            .unwrap();

        AuthenticatedUser {
            user_id: user.id_string().unwrap(),
            role: Some(Role::User),
        }
    }

    fn post_request(title: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: format!("{} 본문", title),
        }
    }

    #[actix_web::test]
    async fn test_popular_posts_ordered_by_comment_count() {
        let (service, user_repo) = service();
        let author = register_user(&user_repo, "여행자").await;

        let quiet = service.create_post(&author, post_request("조용한 글")).await.unwrap();
        let busy = service.create_post(&author, post_request("북적이는 글")).await.unwrap();
        let middling = service.create_post(&author, post_request("보통 글")).await.unwrap();

        for content in ["첫 댓글", "둘째 댓글"] {
            service
                .add_comment(&author, &busy.id, CommentRequest { content: content.to_string() })
                .await
                .unwrap();
        }
        service
            .add_comment(&author, &middling.id, CommentRequest { content: "댓글".to_string() })
            .await
            .unwrap();

        let page = service.popular_posts(1, 10).await.unwrap();

        assert_eq!(page.total, 3);
        let ids: Vec<String> = page.items.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![busy.id, middling.id, quiet.id]);
    }

    #[actix_web::test]
    async fn test_list_posts_by_author_filters_other_authors() {
        let (service, user_repo) = service();
        let first = register_user(&user_repo, "여행자").await;
        let second = register_user(&user_repo, "탐험가").await;

        service.create_post(&first, post_request("내 글")).await.unwrap();
        service.create_post(&second, post_request("남의 글")).await.unwrap();

        let page = service.list_posts_by_author(&first, 1, 10).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "내 글");
        assert_eq!(page.items[0].author_nickname.as_deref(), Some("여행자"));
    }

    #[actix_web::test]
    async fn test_list_comments_by_author_filters_other_authors() {
        let (service, user_repo) = service();
        let first = register_user(&user_repo, "여행자").await;
        let second = register_user(&user_repo, "탐험가").await;

        let post = service.create_post(&first, post_request("글")).await.unwrap();
        service
            .add_comment(&first, &post.id, CommentRequest { content: "내 댓글".to_string() })
            .await
            .unwrap();
        service
            .add_comment(&second, &post.id, CommentRequest { content: "남의 댓글".to_string() })
            .await
            .unwrap();

        let page = service.list_comments_by_author(&first, 1, 10).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].content, "내 댓글");
    }

    #[actix_web::test]
    async fn test_statistics_counts_posts_and_comments() {
        let (service, user_repo) = service();
        let author = register_user(&user_repo, "여행자").await;

        let post = service.create_post(&author, post_request("글")).await.unwrap();
        service
            .add_comment(&author, &post.id, CommentRequest { content: "댓글".to_string() })
            .await
            .unwrap();

        let statistics = service.statistics().await.unwrap();

        assert_eq!(statistics.total_posts, 1);
        assert_eq!(statistics.total_comments, 1);
    }
}
