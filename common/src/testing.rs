//! 컨트롤러 테스트용 인메모리 API

use async_trait::async_trait;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::api::{ApiResult, CalendarApi, PerformanceApi, StampApi, UserApi};
use crate::error::ApiError;
use crate::month::YearMonth;
use crate::types::{
    AvailableStamp, CollectedStamp, ConcertDateMarker, PerformanceSummary, StampDetail, UserInfo,
};

/// 기록된 호출
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    MonthlyDates(YearMonth, Option<Vec<String>>),
    ByDate(NaiveDate, Option<Vec<String>>),
    Today,
    Recent(usize),
    TicketOpening(NaiveDate, NaiveDate),
    Recommended(Option<String>),
    UserInfo,
    Collected(u32, u32),
    Available(u32),
    Collect(i64),
    Detail(i64),
}

#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub failures: RefCell<HashMap<&'static str, ApiError>>,
    pub markers: Vec<ConcertDateMarker>,
    pub daily: Vec<PerformanceSummary>,
    pub today: Vec<PerformanceSummary>,
    pub recent: Vec<PerformanceSummary>,
    pub ticket_opening: Vec<PerformanceSummary>,
    pub recommended: Vec<PerformanceSummary>,
    pub collected: RefCell<Vec<CollectedStamp>>,
    pub available: Vec<AvailableStamp>,
    pub user: RefCell<Option<UserInfo>>,
}

impl FakeApi {
    pub fn logged_in() -> Self {
        let api = Self::default();
        api.set_user(Some(UserInfo {
            id: Some(1),
            nickname: Some("삼문".to_string()),
        }));
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// 해당 메서드가 이후 계속 실패하도록 설정
    pub fn fail(&self, method: &'static str, error: ApiError) {
        self.failures.borrow_mut().insert(method, error);
    }

    pub fn set_user(&self, user: Option<UserInfo>) {
        *self.user.borrow_mut() = user;
    }

    fn record(&self, method: &'static str, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn performance(id: i64, title: &str) -> PerformanceSummary {
    PerformanceSummary {
        id,
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[async_trait(?Send)]
impl CalendarApi for FakeApi {
    async fn fetch_monthly_performance_dates(
        &self,
        month: YearMonth,
        regions: Option<&[String]>,
    ) -> ApiResult<Vec<ConcertDateMarker>> {
        self.record("monthly", Call::MonthlyDates(month, regions.map(<[String]>::to_vec)))?;
        Ok(self.markers.clone())
    }

    async fn fetch_performances_by_date(
        &self,
        date: NaiveDate,
        regions: Option<&[String]>,
    ) -> ApiResult<Vec<PerformanceSummary>> {
        self.record("by_date", Call::ByDate(date, regions.map(<[String]>::to_vec)))?;
        Ok(self.daily.clone())
    }
}

#[async_trait(?Send)]
impl PerformanceApi for FakeApi {
    async fn fetch_today_performances(&self) -> ApiResult<Vec<PerformanceSummary>> {
        self.record("today", Call::Today)?;
        Ok(self.today.clone())
    }

    async fn fetch_recent_performances(&self, limit: usize) -> ApiResult<Vec<PerformanceSummary>> {
        self.record("recent", Call::Recent(limit))?;
        Ok(self.recent.clone())
    }

    async fn fetch_ticket_opening_performances(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ApiResult<Vec<PerformanceSummary>> {
        self.record("ticket_opening", Call::TicketOpening(from, to))?;
        Ok(self.ticket_opening.clone())
    }

    async fn fetch_recommended_performances(
        &self,
        access_token: Option<&str>,
    ) -> ApiResult<Vec<PerformanceSummary>> {
        self.record("recommended", Call::Recommended(access_token.map(str::to_string)))?;
        Ok(self.recommended.clone())
    }
}

#[async_trait(?Send)]
impl UserApi for FakeApi {
    async fn fetch_user_info(&self) -> ApiResult<UserInfo> {
        self.record("user", Call::UserInfo)?;
        self.user.borrow().clone().ok_or(ApiError::Unauthorized)
    }
}

#[async_trait(?Send)]
impl StampApi for FakeApi {
    async fn fetch_collected_stamps(
        &self,
        start_month: u32,
        end_month: u32,
    ) -> ApiResult<Vec<CollectedStamp>> {
        self.record("collected", Call::Collected(start_month, end_month))?;
        Ok(self.collected.borrow().clone())
    }

    async fn fetch_available_stamps(&self, days: u32) -> ApiResult<Vec<AvailableStamp>> {
        self.record("available", Call::Available(days))?;
        Ok(self.available.clone())
    }

    async fn collect_stamp(&self, stamp_id: i64) -> ApiResult<()> {
        self.record("collect", Call::Collect(stamp_id))
    }

    async fn fetch_stamp_detail(&self, stamp_id: i64) -> ApiResult<StampDetail> {
        self.record("detail", Call::Detail(stamp_id))?;
        Ok(StampDetail {
            id: stamp_id,
            title: format!("스탬프 {}", stamp_id),
            ..Default::default()
        })
    }
}
