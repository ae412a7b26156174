//! 원격 API 응답 타입
//!
//! 페이지 컨트롤러는 이 레코드를 분해하지 않고 그대로 전달한다:
//! - PerformanceSummary: 공연 목록 항목
//! - ConcertDateMarker: 월별 공연 날짜 표시
//! - CollectedStamp / AvailableStamp / StampDetail: 스탬프
//! - UserInfo: "who am I" 응답

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 공연 요약
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSummary {
    #[serde(alias = "performanceId")]
    pub id: i64,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(alias = "imageUrl")]
    pub poster_url: Option<String>,
    pub venue: Option<String>,
    pub region: Option<String>,
    pub ticket_open_date: Option<String>,

    /// 알 수 없는 필드는 그대로 보존
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// 월별 공연 날짜 마커
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertDateMarker {
    pub date: NaiveDate,
    #[serde(default)]
    pub count: Option<u32>,
}

/// 수집한 스탬프
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectedStamp {
    pub id: i64,
    pub date: Option<NaiveDate>,
    pub venue_image_url: Option<String>,
    pub place: String,
    pub title: Option<String>,
    #[serde(alias = "performance_id")]
    pub performance_id: Option<i64>,
}

/// 수집 가능한 스탬프
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableStamp {
    pub id: i64,
    pub title: String,
    pub place: String,
    #[serde(alias = "isCollected")]
    pub is_collected: bool,
}

/// 스탬프 상세
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StampDetail {
    pub id: i64,
    pub title: String,
    pub place: String,
    pub date: Option<NaiveDate>,
    pub poster_url: Option<String>,
    pub performance_id: Option<i64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// 사용자 정보
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub id: Option<i64>,
    pub nickname: Option<String>,
}

impl UserInfo {
    /// id가 있어야 로그인 상태로 본다
    pub fn is_identified(&self) -> bool {
        self.id.is_some()
    }
}
