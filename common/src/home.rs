//! 홈 페이지 컨트롤러
//!
//! 마운트당 한 번만 네 가지 목록을 순서대로 불러온다:
//! 오늘 공연 → 최근 공연 → 티켓 오픈 예정 → 추천 공연.
//! 앞의 세 요청 중 하나라도 실패하면 전체가 실패한 것으로 보고,
//! 추천 공연 실패는 빈 목록으로 무시한다.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, error, warn};

use crate::api::{ApiResult, PerformanceApi};
use crate::error::ApiError;
use crate::session::Session;
use crate::types::PerformanceSummary;

/// 최근 공연 조회 개수
pub const RECENT_LIMIT: usize = 6;

/// 티켓 오픈 조회 기간（일）
pub const TICKET_WINDOW_DAYS: i64 = 7;

/// 홈 로드 결과
#[derive(Debug, Clone, PartialEq)]
pub enum HomeLoad {
    /// 이미 로드됨（네트워크 호출 없음）
    Skipped,
    Loaded,
    Failed(ApiError),
}

pub struct HomePageController<A> {
    api: A,
    today: NaiveDate,
    recent_limit: usize,
    ticket_window_days: i64,
    fetched: bool,
    sidebar_open: bool,
    today_performances: Vec<PerformanceSummary>,
    recent_performances: Vec<PerformanceSummary>,
    ticket_open_performances: Vec<PerformanceSummary>,
    recommended_performances: Vec<PerformanceSummary>,
}

struct HomeBatch {
    today: Vec<PerformanceSummary>,
    recent: Vec<PerformanceSummary>,
    ticket_opening: Vec<PerformanceSummary>,
    recommended: Vec<PerformanceSummary>,
}

impl<A: PerformanceApi> HomePageController<A> {
    pub fn new(api: A, today: NaiveDate) -> Self {
        Self {
            api,
            today,
            recent_limit: RECENT_LIMIT,
            ticket_window_days: TICKET_WINDOW_DAYS,
            fetched: false,
            sidebar_open: false,
            today_performances: Vec::new(),
            recent_performances: Vec::new(),
            ticket_open_performances: Vec::new(),
            recommended_performances: Vec::new(),
        }
    }

    /// 최근 공연 개수와 티켓 오픈 기간 변경
    pub fn with_limits(mut self, recent_limit: usize, ticket_window_days: i64) -> Self {
        self.recent_limit = recent_limit;
        self.ticket_window_days = ticket_window_days;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn is_loaded(&self) -> bool {
        self.fetched
    }

    pub fn today_performances(&self) -> &[PerformanceSummary] {
        &self.today_performances
    }

    pub fn recent_performances(&self) -> &[PerformanceSummary] {
        &self.recent_performances
    }

    pub fn ticket_open_performances(&self) -> &[PerformanceSummary] {
        &self.ticket_open_performances
    }

    pub fn recommended_performances(&self) -> &[PerformanceSummary] {
        &self.recommended_performances
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// 오늘 공연 섹션 제목（"5. 15. 공연"）
    pub fn today_heading(&self) -> String {
        format!("{}. {}. 공연", self.today.month(), self.today.day())
    }

    /// 티켓 오픈 조회 기간（오늘 〜 오늘+N일）
    ///
    /// N이 음수거나 날짜 범위를 넘으면 기본 기간으로 계산한다.
    pub fn ticket_window(&self) -> (NaiveDate, NaiveDate) {
        let end = Some(self.ticket_window_days)
            .filter(|days| *days >= 0)
            .and_then(Duration::try_days)
            .and_then(|window| self.today.checked_add_signed(window))
            .unwrap_or_else(|| {
                warn!(days = self.ticket_window_days, "티켓 오픈 기간이 범위를 벗어나 기본값 사용");
                self.today + Duration::days(TICKET_WINDOW_DAYS)
            });
        (self.today, end)
    }

    /// 홈 데이터 로드（마운트당 한 번）
    pub async fn load(&mut self, session: &Session) -> HomeLoad {
        if self.fetched {
            return HomeLoad::Skipped;
        }
        self.fetched = true;

        match self.fetch_batch(session).await {
            Ok(batch) => {
                self.today_performances = batch.today;
                self.recent_performances = batch.recent;
                self.ticket_open_performances = batch.ticket_opening;
                self.recommended_performances = batch.recommended;
                HomeLoad::Loaded
            }
            Err(e) => {
                error!("홈 API 호출 중 오류 발생: {}", e);
                HomeLoad::Failed(e)
            }
        }
    }

    async fn fetch_batch(&self, session: &Session) -> ApiResult<HomeBatch> {
        let (from, to) = self.ticket_window();

        let today = self.api.fetch_today_performances().await?;
        let recent = self.api.fetch_recent_performances(self.recent_limit).await?;
        let ticket_opening = self.api.fetch_ticket_opening_performances(from, to).await?;

        let recommended = match self
            .api
            .fetch_recommended_performances(session.access_token())
            .await
        {
            Ok(list) => list,
            Err(e) => {
                warn!("추천 공연 로딩 실패(무시 가능): {}", e);
                Vec::new()
            }
        };

        for item in &ticket_opening {
            debug!(
                title = %item.title,
                ticket_open_date = item.ticket_open_date.as_deref().unwrap_or("-"),
                "티켓 오픈 날짜 확인"
            );
        }

        Ok(HomeBatch {
            today,
            recent,
            ticket_opening,
            recommended,
        })
    }
}
