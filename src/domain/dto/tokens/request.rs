use serde::Deserialize;
use validator::Validate;

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "리프레시 토큰은 필수입니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_refresh_token_rejected() {
        let request = RefreshRequest {
            refresh_token: String::new(),
        };
        assert!(request.validate().is_err());

        let request = RefreshRequest {
            refresh_token: "some-token".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
