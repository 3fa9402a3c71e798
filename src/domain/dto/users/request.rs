use serde::Deserialize;
use validator::Validate;

/// 닉네임 변경 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNicknameRequest {
    /// 새 닉네임
    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    pub nickname: String,
}

/// 역할 변경 요청 DTO (관리자 전용)
#[derive(Debug, Deserialize, Validate)]
pub struct ChangeRoleRequest {
    /// 새 역할 ("USER" 또는 "ADMIN")
    #[validate(length(min = 1, message = "역할은 필수입니다"))]
    pub role: String,
}

/// 닉네임 중복 확인 쿼리
#[derive(Debug, Deserialize)]
pub struct NicknameQuery {
    pub nickname: String,
}

/// 닉네임 추천 쿼리
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// 추천의 기반이 될 닉네임
    pub nickname: String,
    #[serde(default = "default_suggest_count")]
    pub count: usize,
}

fn default_suggest_count() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_length_validation() {
        let too_short = UpdateNicknameRequest {
            nickname: "a".to_string(),
        };
        assert!(too_short.validate().is_err());

        let valid = UpdateNicknameRequest {
            nickname: "여행자".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}
