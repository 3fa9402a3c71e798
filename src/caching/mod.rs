//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 분산 캐시 지원과 JSON 기반 객체 직렬화를 제공합니다.
//! 리프레시 토큰 저장소가 이 계층 위에 구현됩니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 연결 풀링
//! - JSON 기반 자동 직렬화/역직렬화
//! - 원시 문자열 저장 (리프레시 토큰)
//! - TTL 지원 및 패턴 기반 키 검색
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_string_with_expiry("refresh_token:123", token, 604800).await?;
//!
//! let stored: Option<String> = cache.get_string("refresh_token:123").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
