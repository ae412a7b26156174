//! 원격 API 계약
//!
//! 실제 HTTP 구현은 클라이언트 쪽에 있다. 페이지 컨트롤러는 이 트레이트만 본다.
//! UI 이벤트 루프가 단일 스레드이므로 Future에 Send를 요구하지 않는다.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ApiError;
use crate::month::YearMonth;
use crate::types::{
    AvailableStamp, CollectedStamp, ConcertDateMarker, PerformanceSummary, StampDetail, UserInfo,
};

/// API 호출 결과
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// 캘린더 API
#[async_trait(?Send)]
pub trait CalendarApi {
    async fn fetch_monthly_performance_dates(
        &self,
        month: YearMonth,
        regions: Option<&[String]>,
    ) -> ApiResult<Vec<ConcertDateMarker>>;

    async fn fetch_performances_by_date(
        &self,
        date: NaiveDate,
        regions: Option<&[String]>,
    ) -> ApiResult<Vec<PerformanceSummary>>;
}

/// 공연 API
#[async_trait(?Send)]
pub trait PerformanceApi {
    async fn fetch_today_performances(&self) -> ApiResult<Vec<PerformanceSummary>>;

    async fn fetch_recent_performances(&self, limit: usize) -> ApiResult<Vec<PerformanceSummary>>;

    async fn fetch_ticket_opening_performances(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ApiResult<Vec<PerformanceSummary>>;

    /// 토큰이 있으면 개인화 추천
    async fn fetch_recommended_performances(
        &self,
        access_token: Option<&str>,
    ) -> ApiResult<Vec<PerformanceSummary>>;
}

/// 사용자 API
#[async_trait(?Send)]
pub trait UserApi {
    async fn fetch_user_info(&self) -> ApiResult<UserInfo>;
}

/// 스탬프 API
#[async_trait(?Send)]
pub trait StampApi {
    async fn fetch_collected_stamps(
        &self,
        start_month: u32,
        end_month: u32,
    ) -> ApiResult<Vec<CollectedStamp>>;

    async fn fetch_available_stamps(&self, days: u32) -> ApiResult<Vec<AvailableStamp>>;

    async fn collect_stamp(&self, stamp_id: i64) -> ApiResult<()>;

    async fn fetch_stamp_detail(&self, stamp_id: i64) -> ApiResult<StampDetail>;
}
