use std::sync::Arc;
use crate::caching::redis::RedisClient;
use crate::config::JwtConfig;
use crate::errors::{AppError, AppResult};

/// 리프레시 토큰 저장소
///
/// Redis에 `{prefix}{user_id}` 형태의 키로 리프레시 토큰 원문을 저장합니다.
/// 사용자당 하나의 토큰만 유지되므로 새 토큰을 저장하면 이전 토큰은
/// 자동으로 무효화됩니다. TTL은 리프레시 토큰 유효 기간과 같고,
/// 저장할 때마다 새로 적용됩니다.
#[derive(Clone)]
pub struct TokenRepository {
    redis: Arc<RedisClient>,
    key_prefix: String,
    ttl_seconds: u64,
    /// 테스트 전용 인메모리 백엔드. `Some`이면 Redis 대신 사용됩니다.
    #[cfg(test)]
    memory: Option<Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>>,
}

impl TokenRepository {
    /// 설정에서 키 접두사와 TTL을 읽어 저장소를 생성합니다.
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self {
            redis,
            key_prefix: JwtConfig::refresh_token_key_prefix(),
            ttl_seconds: JwtConfig::refresh_token_validity_seconds().max(0) as u64,
            #[cfg(test)]
            memory: None,
        }
    }

    /// 테스트용 생성자 (접두사와 TTL을 직접 지정)
    #[cfg(test)]
    pub fn with_config(redis: Arc<RedisClient>, key_prefix: String, ttl_seconds: u64) -> Self {
        Self {
            redis,
            key_prefix,
            ttl_seconds,
            memory: None,
        }
    }

    /// 테스트용 인메모리 저장소 생성자
    ///
    /// Redis 없이 저장/조회/삭제의 상태 전이를 검증할 때 사용합니다.
    /// TTL 만료는 모사하지 않습니다.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            redis: Arc::new(RedisClient::default()),
            key_prefix: "refresh_token:".to_string(),
            ttl_seconds: 604800,
            memory: Some(Arc::new(std::sync::Mutex::new(
                std::collections::HashMap::new(),
            ))),
        }
    }

    fn key(&self, user_id: &str) -> String {
        format!("{}{}", self.key_prefix, user_id)
    }

    /// 리프레시 토큰을 저장합니다.
    ///
    /// 기존 토큰이 있으면 덮어쓰고 TTL을 새로 적용합니다.
    pub async fn save_refresh_token(&self, user_id: &str, refresh_token: &str) -> AppResult<()> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            store
                .lock()
                .unwrap()
                .insert(self.key(user_id), refresh_token.to_string());
            return Ok(());
        }

        self.redis
            .set_string_with_expiry(&self.key(user_id), refresh_token, self.ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(format!("리프레시 토큰 저장 실패: {}", e)))?;

        log::debug!("리프레시 토큰 저장 완료 - user_id: {}, ttl: {}초", user_id, self.ttl_seconds);
        Ok(())
    }

    /// 저장된 리프레시 토큰을 조회합니다.
    ///
    /// 키가 없는 것(만료 포함)은 오류가 아니라 `Ok(None)`입니다.
    pub async fn get_refresh_token(&self, user_id: &str) -> AppResult<Option<String>> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store.lock().unwrap().get(&self.key(user_id)).cloned());
        }

        self.redis
            .get_string(&self.key(user_id))
            .await
            .map_err(|e| AppError::RedisError(format!("리프레시 토큰 조회 실패: {}", e)))
    }

    /// 리프레시 토큰을 삭제합니다. (로그아웃)
    ///
    /// 저장된 토큰이 없어도 성공으로 처리합니다.
    pub async fn delete_refresh_token(&self, user_id: &str) -> AppResult<()> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            store.lock().unwrap().remove(&self.key(user_id));
            return Ok(());
        }

        self.redis
            .del(&self.key(user_id))
            .await
            .map_err(|e| AppError::RedisError(format!("리프레시 토큰 삭제 실패: {}", e)))
    }

    /// 저장된 리프레시 토큰의 존재 여부를 확인합니다.
    pub async fn has_refresh_token(&self, user_id: &str) -> AppResult<bool> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            return Ok(store.lock().unwrap().contains_key(&self.key(user_id)));
        }

        self.redis
            .exists(&self.key(user_id))
            .await
            .map_err(|e| AppError::RedisError(format!("리프레시 토큰 확인 실패: {}", e)))
    }

    /// 모든 리프레시 토큰을 삭제합니다. (관리 작업용)
    ///
    /// KEYS 스캔을 사용하므로 서명 키 교체 같은 드문 운영 작업에만 사용합니다.
    pub async fn delete_all_refresh_tokens(&self) -> AppResult<u64> {
        #[cfg(test)]
        if let Some(store) = &self.memory {
            let mut map = store.lock().unwrap();
            let count = map.len() as u64;
            map.clear();
            return Ok(count);
        }

        let pattern = format!("{}*", self.key_prefix);
        let keys = self
            .redis
            .keys(&pattern)
            .await
            .map_err(|e| AppError::RedisError(format!("토큰 키 검색 실패: {}", e)))?;

        let count = keys.len() as u64;
        self.redis
            .del_multiple(&keys)
            .await
            .map_err(|e| AppError::RedisError(format!("토큰 일괄 삭제 실패: {}", e)))?;

        log::info!("리프레시 토큰 전체 삭제 완료 - {}개", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        // Redis 연결 없이 클라이언트 생성만 수행한다
        let redis = Arc::new(RedisClient::default());
        let repo = TokenRepository::with_config(redis, "refresh_token:".to_string(), 604800);

        assert_eq!(repo.key("507f1f77bcf86cd799439011"), "refresh_token:507f1f77bcf86cd799439011");
    }

    #[actix_web::test]
    async fn test_in_memory_store_lifecycle() {
        let repo = TokenRepository::in_memory();

        assert!(!repo.has_refresh_token("u1").await.unwrap());

        repo.save_refresh_token("u1", "token-a").await.unwrap();
        assert_eq!(
            repo.get_refresh_token("u1").await.unwrap().as_deref(),
            Some("token-a")
        );

        // 저장은 사용자당 하나, 새 토큰이 이전 토큰을 대체한다
        repo.save_refresh_token("u1", "token-b").await.unwrap();
        assert_eq!(
            repo.get_refresh_token("u1").await.unwrap().as_deref(),
            Some("token-b")
        );

        repo.delete_refresh_token("u1").await.unwrap();
        assert!(repo.get_refresh_token("u1").await.unwrap().is_none());

        repo.save_refresh_token("u1", "token-c").await.unwrap();
        repo.save_refresh_token("u2", "token-d").await.unwrap();
        assert_eq!(repo.delete_all_refresh_tokens().await.unwrap(), 2);
        assert!(!repo.has_refresh_token("u2").await.unwrap());
    }
}
