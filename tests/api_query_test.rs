//! 엔드포인트 쿼리 조립・응답 디코드 테스트

use chrono::NaiveDate;
use concert_pages::api::{
    collect_stamp_path, decode_body, monthly_dates_query, performances_by_date_query,
    region_query, stamp_detail_path, ticket_opening_query, HttpApi,
};
use concert_pages_common::{
    ApiError, PerformanceSummary, Session, StampDetail, UserInfo, YearMonth,
};
use std::time::Duration;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_region_query_omitted_for_all() {
    assert!(region_query(None).is_empty());
}

#[test]
fn test_region_query_repeats_parameter() {
    let regions = vec!["서울".to_string(), "부산".to_string()];
    assert_eq!(
        region_query(Some(regions.as_slice())),
        vec![("region", "서울".to_string()), ("region", "부산".to_string())]
    );
}

#[test]
fn test_monthly_dates_query() {
    let month = YearMonth::new(2024, 5).unwrap();
    let regions = vec!["대구".to_string()];
    assert_eq!(
        monthly_dates_query(month, Some(regions.as_slice())),
        vec![
            ("year", "2024".to_string()),
            ("month", "05".to_string()),
            ("region", "대구".to_string()),
        ]
    );
}

#[test]
fn test_performances_by_date_query() {
    assert_eq!(
        performances_by_date_query(date(2024, 5, 15), None),
        vec![("date", "2024-05-15".to_string())]
    );
}

#[test]
fn test_ticket_opening_query() {
    assert_eq!(
        ticket_opening_query(date(2024, 5, 15), date(2024, 5, 22)),
        vec![
            ("startDate", "2024-05-15".to_string()),
            ("endDate", "2024-05-22".to_string()),
        ]
    );
}

#[test]
fn test_stamp_paths() {
    assert_eq!(collect_stamp_path(12), "/api/stamps/12/collect");
    assert_eq!(stamp_detail_path(12), "/api/stamps/12");
}

#[test]
fn test_decode_plain_list() {
    let body = serde_json::json!([{"id": 1, "title": "A"}]);
    let list: Vec<PerformanceSummary> = decode_body(body).unwrap();
    assert_eq!(list[0].title, "A");
}

#[test]
fn test_decode_data_envelope() {
    let body = serde_json::json!({"status": 200, "data": [{"id": 2, "title": "B"}]});
    let list: Vec<PerformanceSummary> = decode_body(body).unwrap();
    assert_eq!(list[0].id, 2);
}

/// 기본값으로 채워지는 타입도 봉투 안을 읽어야 한다
#[test]
fn test_decode_enveloped_user_info() {
    let body = serde_json::json!({"status": 200, "data": {"id": 42}});
    let user: UserInfo = decode_body(body).unwrap();
    assert_eq!(user.id, Some(42));
    assert!(user.is_identified());
}

#[test]
fn test_decode_enveloped_stamp_detail() {
    let body = serde_json::json!({"data": {"id": 7, "title": "T"}});
    let detail: StampDetail = decode_body(body).unwrap();
    assert_eq!(detail.id, 7);
    assert_eq!(detail.title, "T");
    assert!(!detail.extra.contains_key("data"));
}

#[test]
fn test_decode_bare_user_info() {
    let body = serde_json::json!({"id": 5, "nickname": "밴드덕후"});
    let user: UserInfo = decode_body(body).unwrap();
    assert_eq!(user.id, Some(5));
}

#[test]
fn test_decode_failure() {
    let body = serde_json::json!("not a list");
    let result: Result<Vec<PerformanceSummary>, ApiError> = decode_body(body);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn test_http_api_url_trims_trailing_slash() {
    let api = HttpApi::new("http://localhost:8080/", Session::anonymous(), Duration::from_secs(1))
        .unwrap();
    assert_eq!(api.url("/api/user/me"), "http://localhost:8080/api/user/me");
}
