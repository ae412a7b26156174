//! 에러 타입 정의

use thiserror::Error;

/// 원격 API 호출 에러
///
/// 401은 세션 만료 신호로 다른 실패와 구분한다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("인증이 만료되었습니다 (401)")]
    Unauthorized,

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// 비정상 응답 상태 코드를 에러로 변환
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Http { status }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
