//! 백엔드 API 연동
//!
//! 엔드포인트 경로와 쿼리 조립은 여기에, 실제 요청은 http.rs에 둔다.

pub mod http;

pub use http::HttpApi;

use chrono::NaiveDate;
use concert_pages_common::{date_param, ApiError, YearMonth};
use serde::de::DeserializeOwned;

pub const MONTHLY_DATES_PATH: &str = "/api/calendar/monthly";
pub const PERFORMANCES_BY_DATE_PATH: &str = "/api/calendar/daily";
pub const TODAY_PATH: &str = "/api/performances/today";
pub const RECENT_PATH: &str = "/api/performances/recent";
pub const TICKET_OPENING_PATH: &str = "/api/performances/ticket-opening";
pub const RECOMMENDED_PATH: &str = "/api/performances/recommendations";
pub const USER_INFO_PATH: &str = "/api/user/me";
pub const COLLECTED_STAMPS_PATH: &str = "/api/stamps";
pub const AVAILABLE_STAMPS_PATH: &str = "/api/stamps/available";

/// 쿼리 파라미터 목록
pub type Query = Vec<(&'static str, String)>;

/// 지역은 `region` 파라미터를 반복해서 보낸다（전체면 생략）
pub fn region_query(regions: Option<&[String]>) -> Query {
    regions
        .unwrap_or_default()
        .iter()
        .map(|r| ("region", r.clone()))
        .collect()
}

pub fn monthly_dates_query(month: YearMonth, regions: Option<&[String]>) -> Query {
    let mut query = vec![("year", month.year_param()), ("month", month.month_param())];
    query.extend(region_query(regions));
    query
}

pub fn performances_by_date_query(date: NaiveDate, regions: Option<&[String]>) -> Query {
    let mut query = vec![("date", date_param(date))];
    query.extend(region_query(regions));
    query
}

pub fn ticket_opening_query(from: NaiveDate, to: NaiveDate) -> Query {
    vec![("startDate", date_param(from)), ("endDate", date_param(to))]
}

pub fn collect_stamp_path(stamp_id: i64) -> String {
    format!("{}/{}/collect", COLLECTED_STAMPS_PATH, stamp_id)
}

pub fn stamp_detail_path(stamp_id: i64) -> String {
    format!("{}/{}", COLLECTED_STAMPS_PATH, stamp_id)
}

/// 응답 본문 디코드
///
/// 최상위 객체에 `data` 키가 있으면 `{ "data": ... }` 봉투로 보고 그 안을 디코드한다.
/// 기본값을 채우는 타입은 봉투째로도 디코드가 성공하므로 봉투를 먼저 본다.
pub fn decode_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ApiError> {
    let payload = match body {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
