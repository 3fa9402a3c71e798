//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! Google/Kakao OAuth 인증으로만 생성되는 User 엔티티와
//! 역할(Role) 열거형을 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, Role};
//! use crate::config::AuthProvider;
//!
//! let user = User::new_oauth(
//!     Some("user@gmail.com".to_string()),
//!     "여행자".to_string(),
//!     AuthProvider::Google,
//!     "google_user_id_123".to_string(),
//!     Some("https://example.com/photo.jpg".to_string()),
//! );
//! assert_eq!(user.role, Role::User);
//! ```

pub mod user;
