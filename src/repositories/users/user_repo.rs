//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 조회 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **소셜 로그인 조회**: (provider, provider_id) 쌍으로 연합 신원 조회
//! - **유니크 제약**: 닉네임, 소셜 신원 쌍은 DB 인덱스가 최종 보장

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId, to_bson},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};

use crate::{
    caching::redis::RedisClient,
    config::auth_config::AuthProvider,
    db::Database,
    domain::entities::users::user::{Role, User},
    errors::errors::AppError,
};

/// 개별 사용자 캐시 TTL (초)
const USER_CACHE_TTL: usize = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과
/// Redis 캐시를 통합하여 조회 성능을 최적화합니다.
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `user:{user_id}` (ID 조회만 캐싱)
/// - **TTL**: 600초 (10분)
/// - **쓰기 후 무효화**: 닉네임/역할 변경 및 삭제 시 캐시 제거
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
/// - **ConflictError**: 닉네임/소셜 신원 중복
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
    /// 테스트 전용 인메모리 백엔드. `Some`이면 MongoDB/Redis 대신 사용됩니다.
    #[cfg(test)]
    memory: Option<Arc<std::sync::Mutex<Vec<User>>>>,
}

impl UserRepository {
    /// 새 사용자 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            #[cfg(test)]
            memory: None,
        }
    }

    /// 테스트용 인메모리 리포지토리 생성자
    ///
    /// 연합 신원 해석, 닉네임 충돌 같은 상태 기반 동작을
    /// 외부 저장소 없이 검증할 때 사용합니다.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            db: Arc::new(Database::offline_for_tests()),
            redis: Arc::new(RedisClient::default()),
            memory: Some(Arc::new(std::sync::Mutex::new(Vec::new()))),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>("users")
    }

    fn cache_key(id: &str) -> String {
        format!("user:{}", id)
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 캐시 우선 조회를 적용합니다.
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 24자리 16진수 문자열
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == Some(object_id))
                .cloned());
        }

        let cache_key = Self::cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis.set_with_expiry(&cache_key, user, USER_CACHE_TTL).await;
        }

        Ok(user)
    }

    /// 소셜 신원으로 사용자 조회
    ///
    /// 동일 제공자의 동일 계정은 항상 같은 사용자로 해석되어야 하므로
    /// (provider, provider_id) 쌍은 유니크 인덱스로 보호됩니다.
    pub async fn find_by_provider(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.provider == provider && u.provider_id == provider_id)
                .cloned());
        }

        let provider_bson = to_bson(&provider)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.collection()
            .find_one(doc! { "provider": provider_bson, "provider_id": provider_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 닉네임으로 사용자 조회
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.nickname == nickname)
                .cloned());
        }

        self.collection()
            .find_one(doc! { "nickname": nickname })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 닉네임 사용 여부 확인
    pub async fn nickname_exists(&self, nickname: &str) -> Result<bool, AppError> {
        Ok(self.find_by_nickname(nickname).await?.is_some())
    }

    /// 새 사용자 생성
    ///
    /// 닉네임과 소셜 신원의 중복 여부를 사전에 검증합니다.
    /// 검증은 best-effort이며 동시 생성 경합은 유니크 인덱스가 막습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 닉네임 또는 소셜 신원 중복
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.nickname_exists(&user.nickname).await? {
            return Err(AppError::ConflictError(
                "이미 사용 중인 닉네임입니다".to_string(),
            ));
        }

        if self
            .find_by_provider(user.provider, &user.provider_id)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 가입된 소셜 계정입니다".to_string(),
            ));
        }

        #[cfg(test)]
        if let Some(store) = &self.memory {
            user.id = Some(ObjectId::new());
            store.lock().unwrap().push(user.clone());
            return Ok(user);
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                // 유니크 인덱스 위반(E11000)은 경합에서 진 쪽이므로 409로 변환
                if e.to_string().contains("E11000") {
                    AppError::ConflictError("이미 가입된 사용자입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 닉네임 변경
    ///
    /// 업데이트 후 최신 사용자 정보를 반환하고 캐시를 무효화합니다.
    pub async fn update_nickname(
        &self,
        id: &str,
        nickname: &str,
    ) -> Result<Option<User>, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Self::memory_update(store, id, |u| u.nickname = nickname.to_string());
        }

        self.update_fields(id, doc! { "nickname": nickname }).await
    }

    /// 역할 변경
    pub async fn update_role(&self, id: &str, role: Role) -> Result<Option<User>, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Self::memory_update(store, id, |u| u.role = role);
        }

        let role_bson = to_bson(&role)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.update_fields(id, doc! { "role": role_bson }).await
    }

    #[cfg(test)]
    fn memory_update(
        store: &std::sync::Mutex<Vec<User>>,
        id: &str,
        apply: impl FnOnce(&mut User),
    ) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut users = store.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(object_id)) {
            Some(user) => {
                apply(user);
                user.updated_at = mongodb::bson::DateTime::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn update_fields(
        &self,
        id: &str,
        mut fields: Document,
    ) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        fields.insert("updated_at", mongodb::bson::DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.redis.del(&Self::cache_key(id)).await;
        }

        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut users = store.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != Some(object_id));
            return Ok(users.len() < before);
        }

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.redis.del(&Self::cache_key(id)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 사용자 목록 페이지 조회 (가입일 내림차순)
    pub async fn find_page(&self, page: u64, size: u64) -> Result<Vec<User>, AppError> {
        let skip = (page.saturating_sub(1)) * size;

        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut users = store.lock().unwrap().clone();
            users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            return Ok(users
                .into_iter()
                .skip(skip as usize)
                .take(size as usize)
                .collect());
        }

        let cursor = self
            .collection()
            .find(doc! {})
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

    /// 전체 사용자 수
    pub async fn count(&self) -> Result<u64, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store.lock().unwrap().len() as u64);
        }

        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 역할별 사용자 수
    pub async fn count_by_role(&self, role: Role) -> Result<u64, AppError> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store
                .lock()
                .unwrap()
                .iter()
                .filter(|u| u.role == role)
                .count() as u64);
        }

        let role_bson = to_bson(&role)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.collection()
            .count_documents(doc! { "role": role_bson })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_format() {
        assert_eq!(
            UserRepository::cache_key("507f1f77bcf86cd799439011"),
            "user:507f1f77bcf86cd799439011"
        );
    }

    #[test]
    fn test_provider_bson_matches_stored_form() {
        // 저장 형식은 serde 직렬화(대문자)를 따른다
        let bson = to_bson(&AuthProvider::Kakao).unwrap();
        assert_eq!(bson, mongodb::bson::Bson::String("KAKAO".to_string()));

        let role = to_bson(&Role::Admin).unwrap();
        assert_eq!(role, mongodb::bson::Bson::String("ADMIN".to_string()));
    }
}
