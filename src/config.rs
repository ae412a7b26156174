use crate::error::{AppError, Result};
use concert_pages_common::Session;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BASE_URL_ENV: &str = "CONCERT_PAGES_BASE_URL";
const TOKEN_ENV: &str = "CONCERT_PAGES_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: Option<String>,
    pub access_token: Option<String>,
    pub timeout_seconds: u64,
    pub recent_limit: usize,
    pub ticket_window_days: i64,
    pub available_stamp_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout_seconds: 10,
            recent_limit: concert_pages_common::home::RECENT_LIMIT,
            ticket_window_days: concert_pages_common::home::TICKET_WINDOW_DAYS,
            available_stamp_days: concert_pages_common::stamp::AVAILABLE_STAMP_DAYS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 파일이 없으면 기본값
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("concert-pages").join("config.json"))
    }

    /// API 서버 주소（환경 변수 우선）
    pub fn base_url(&self) -> Result<String> {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            return Ok(url);
        }

        self.base_url.clone().ok_or(AppError::MissingBaseUrl)
    }

    /// 세션 컨텍스트（환경 변수 토큰 우선）
    pub fn session(&self) -> Session {
        match std::env::var(TOKEN_ENV) {
            Ok(token) => Session::with_token(token),
            Err(_) => self
                .access_token
                .clone()
                .map(Session::with_token)
                .unwrap_or_default(),
        }
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let url = url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!("http(s) 주소가 아닙니다: {}", url)));
        }
        self.base_url = Some(url);
        Ok(())
    }

    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token.filter(|t| !t.trim().is_empty());
    }
}
