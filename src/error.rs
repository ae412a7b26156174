use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("API 서버 주소가 설정되지 않았습니다. `concert-pages config --set-base-url URL` 로 설정하세요")]
    MissingBaseUrl,

    #[error("HTTP 클라이언트 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON 파싱 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("입력 오류: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("로그인이 필요합니다. `concert-pages config --set-token TOKEN` 으로 토큰을 설정하세요")]
    LoginRequired,

    #[error(transparent)]
    Common(#[from] concert_pages_common::Error),
}

impl From<concert_pages_common::ApiError> for AppError {
    fn from(e: concert_pages_common::ApiError) -> Self {
        AppError::Common(e.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
