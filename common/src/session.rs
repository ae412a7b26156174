//! 세션 컨텍스트
//!
//! 토큰을 전역 저장소에서 직접 읽지 않고 컨트롤러에 명시적으로 넘긴다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 빈 문자열 토큰은 익명으로 취급
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            access_token: (!token.trim().is_empty()).then_some(token),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn clear(&mut self) {
        self.access_token = None;
    }
}
