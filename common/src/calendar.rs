//! 공연 캘린더 페이지 컨트롤러
//!
//! 월 이동・날짜 선택・지역 필터 변경에 따라 월별 공연 날짜와
//! 날짜별 공연 목록을 다시 불러온다. 실패하면 해당 목록을 비우고 로그만 남긴다.

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::api::{ApiResult, CalendarApi};
use crate::month::{daily_title, YearMonth};
use crate::region::RegionFilter;
use crate::request::{Generation, Ticket};
use crate::types::{ConcertDateMarker, PerformanceSummary};

/// 월별 공연 날짜 요청
#[derive(Debug, Clone, PartialEq)]
pub struct MonthQuery {
    pub ticket: Ticket,
    pub month: YearMonth,
    pub regions: Option<Vec<String>>,
}

/// 날짜별 공연 목록 요청
#[derive(Debug, Clone, PartialEq)]
pub struct DailyQuery {
    pub ticket: Ticket,
    pub date: NaiveDate,
    pub regions: Option<Vec<String>>,
}

pub struct CalendarPageController<A> {
    api: A,
    current_month: YearMonth,
    selected_date: Option<NaiveDate>,
    regions: RegionFilter,
    region_sheet_open: bool,
    month_markers: Vec<ConcertDateMarker>,
    daily_concerts: Vec<PerformanceSummary>,
    month_generation: Generation,
    daily_generation: Generation,
}

impl<A: CalendarApi> CalendarPageController<A> {
    /// 오늘 날짜가 속한 달, 오늘 선택, 지역 "전체"로 시작
    pub fn new(api: A, today: NaiveDate) -> Self {
        Self {
            api,
            current_month: YearMonth::of(today),
            selected_date: Some(today),
            regions: RegionFilter::all(),
            region_sheet_open: false,
            month_markers: Vec::new(),
            daily_concerts: Vec::new(),
            month_generation: Generation::default(),
            daily_generation: Generation::default(),
        }
    }

    /// 진입 시 표시할 달
    pub fn with_month(mut self, month: YearMonth) -> Self {
        self.current_month = month;
        self
    }

    /// 진입 시 선택할 날짜（그 날짜가 속한 달도 함께 표시）
    pub fn with_selected_date(mut self, date: NaiveDate) -> Self {
        self.current_month = YearMonth::of(date);
        self.selected_date = Some(date);
        self
    }

    pub fn with_regions(mut self, regions: RegionFilter) -> Self {
        self.regions = regions;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn current_month(&self) -> YearMonth {
        self.current_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn regions(&self) -> &RegionFilter {
        &self.regions
    }

    pub fn is_region_sheet_open(&self) -> bool {
        self.region_sheet_open
    }

    pub fn month_markers(&self) -> &[ConcertDateMarker] {
        &self.month_markers
    }

    pub fn daily_concerts(&self) -> &[PerformanceSummary] {
        &self.daily_concerts
    }

    /// 월 이동 바 제목
    pub fn month_title(&self) -> String {
        self.current_month.title()
    }

    /// 일별 목록 제목（선택된 날짜가 없으면 None）
    pub fn daily_title(&self) -> Option<String> {
        self.selected_date.map(daily_title)
    }

    /// 페이지 진입: 이번 달 공연 날짜, 오늘 공연 목록 순으로 로드
    pub async fn mount(&mut self) {
        self.reload_month().await;
        self.reload_daily().await;
    }

    /// 월 이동 후 월별 공연 날짜 재조회
    pub async fn set_month(&mut self, delta: i32) {
        self.current_month = self.current_month.shift(delta);
        self.reload_month().await;
    }

    /// 날짜 선택 후 현재 지역 필터로 공연 목록 재조회
    pub async fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.reload_daily().await;
    }

    /// 날짜 선택 해제（목록 비움）
    pub fn clear_selected_date(&mut self) {
        self.selected_date = None;
        self.daily_generation.issue();
        self.daily_concerts.clear();
    }

    /// 지역 토글
    ///
    /// 날짜가 선택되어 있으면 새 필터로 공연 목록을 즉시 재조회한 뒤
    /// 월별 공연 날짜도 다시 불러온다.
    pub async fn set_region_filter(&mut self, region: &str) {
        self.regions = self.regions.toggled(region);
        debug!(regions = %self.regions.label(), "지역 필터 변경");

        self.reload_daily().await;
        self.reload_month().await;
    }

    pub fn open_region_sheet(&mut self) {
        self.region_sheet_open = true;
    }

    pub fn close_region_sheet(&mut self) {
        self.region_sheet_open = false;
    }

    /// 월별 공연 날짜 요청 시작
    pub fn begin_month_load(&mut self) -> MonthQuery {
        MonthQuery {
            ticket: self.month_generation.issue(),
            month: self.current_month,
            regions: self.regions.as_query(),
        }
    }

    /// 월별 공연 날짜 응답 반영（이미 대체된 요청이면 false）
    pub fn finish_month_load(
        &mut self,
        ticket: Ticket,
        result: ApiResult<Vec<ConcertDateMarker>>,
    ) -> bool {
        if !self.month_generation.is_current(ticket) {
            debug!("대체된 월별 공연 날짜 응답 무시");
            return false;
        }
        match result {
            Ok(markers) => {
                debug!(month = %self.current_month, count = markers.len(), "[캘린더] 월별 공연 날짜 응답");
                self.month_markers = markers;
            }
            Err(e) => {
                error!("월별 공연 날짜 API 호출 실패: {}", e);
                self.month_markers.clear();
            }
        }
        true
    }

    /// 날짜별 공연 목록 요청 시작（선택된 날짜가 없으면 None）
    pub fn begin_daily_load(&mut self) -> Option<DailyQuery> {
        let date = self.selected_date?;
        Some(DailyQuery {
            ticket: self.daily_generation.issue(),
            date,
            regions: self.regions.as_query(),
        })
    }

    /// 날짜별 공연 목록 응답 반영（이미 대체된 요청이면 false）
    pub fn finish_daily_load(
        &mut self,
        ticket: Ticket,
        result: ApiResult<Vec<PerformanceSummary>>,
    ) -> bool {
        if !self.daily_generation.is_current(ticket) {
            debug!("대체된 날짜별 공연 목록 응답 무시");
            return false;
        }
        match result {
            Ok(concerts) => {
                debug!(count = concerts.len(), "[캘린더] 날짜별 공연 리스트 응답");
                self.daily_concerts = concerts;
            }
            Err(e) => {
                error!("날짜별 공연 리스트 API 호출 실패: {}", e);
                self.daily_concerts.clear();
            }
        }
        true
    }

    async fn reload_month(&mut self) {
        let query = self.begin_month_load();
        let result = self
            .api
            .fetch_monthly_performance_dates(query.month, query.regions.as_deref())
            .await;
        self.finish_month_load(query.ticket, result);
    }

    async fn reload_daily(&mut self) {
        let Some(query) = self.begin_daily_load() else {
            return;
        };
        let result = self
            .api
            .fetch_performances_by_date(query.date, query.regions.as_deref())
            .await;
        self.finish_daily_load(query.ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::region::ALL_REGIONS;
    use crate::testing::{date, performance, Call, FakeApi};

    fn controller() -> CalendarPageController<FakeApi> {
        let api = FakeApi {
            daily: vec![performance(1, "봄 콘서트")],
            markers: vec![ConcertDateMarker {
                date: date(2024, 5, 15),
                count: Some(2),
            }],
            ..Default::default()
        };
        CalendarPageController::new(api, date(2024, 5, 15))
    }

    #[tokio::test]
    async fn test_mount_loads_month_then_today() {
        let mut page = controller();
        page.mount().await;

        assert_eq!(
            page.api().calls(),
            vec![
                Call::MonthlyDates(YearMonth::new(2024, 5).unwrap(), None),
                Call::ByDate(date(2024, 5, 15), None),
            ]
        );
        assert_eq!(page.daily_concerts().len(), 1);
        assert_eq!(page.month_markers().len(), 1);
        assert_eq!(page.month_title(), "5월");
        assert_eq!(page.daily_title().as_deref(), Some("5월 15일 공연"));
    }

    #[tokio::test]
    async fn test_set_month_wraps_year_and_refetches() {
        let mut page = CalendarPageController::new(FakeApi::default(), date(2024, 1, 10));
        page.set_month(-1).await;

        assert_eq!(page.current_month(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(
            page.api().calls(),
            vec![Call::MonthlyDates(YearMonth::new(2023, 12).unwrap(), None)]
        );
    }

    #[tokio::test]
    async fn test_select_date_uses_current_filter() {
        let mut page = controller();
        page.set_region_filter("서울").await;
        page.api().clear_calls();

        page.select_date(date(2024, 5, 20)).await;
        assert_eq!(page.selected_date(), Some(date(2024, 5, 20)));
        assert_eq!(
            page.api().calls(),
            vec![Call::ByDate(date(2024, 5, 20), Some(vec!["서울".to_string()]))]
        );
    }

    #[tokio::test]
    async fn test_region_sequence_refetches_daily_with_busan() {
        let mut page = controller();
        page.mount().await;

        page.set_region_filter("서울").await;
        page.set_region_filter("부산").await;
        page.api().clear_calls();
        page.set_region_filter("서울").await;

        let busan = Some(vec!["부산".to_string()]);
        assert_eq!(page.regions().as_query(), busan);
        assert_eq!(
            page.api().calls(),
            vec![
                Call::ByDate(date(2024, 5, 15), busan.clone()),
                Call::MonthlyDates(YearMonth::new(2024, 5).unwrap(), busan),
            ]
        );
    }

    #[tokio::test]
    async fn test_region_change_without_selected_date_only_refetches_month() {
        let mut page = controller();
        page.clear_selected_date();
        page.set_region_filter(ALL_REGIONS).await;

        assert_eq!(
            page.api().calls(),
            vec![Call::MonthlyDates(YearMonth::new(2024, 5).unwrap(), None)]
        );
        assert_eq!(page.daily_title(), None);
    }

    #[tokio::test]
    async fn test_fetch_failure_resets_to_empty() {
        let mut page = controller();
        page.mount().await;
        assert!(!page.daily_concerts().is_empty());

        page.api().fail("by_date", ApiError::Transport("timeout".into()));
        page.api().fail("monthly", ApiError::Http { status: 500 });
        page.select_date(date(2024, 5, 16)).await;
        page.set_month(1).await;

        assert!(page.daily_concerts().is_empty());
        assert!(page.month_markers().is_empty());
    }

    #[tokio::test]
    async fn test_stale_daily_result_is_ignored() {
        let mut page = controller();
        page.select_date(date(2024, 5, 1)).await;
        let older = page.begin_daily_load().unwrap();
        page.select_date(date(2024, 5, 2)).await;
        let newer = page.begin_daily_load().unwrap();

        assert!(page.finish_daily_load(newer.ticket, Ok(vec![performance(2, "새 목록")])));
        assert!(!page.finish_daily_load(older.ticket, Ok(vec![performance(1, "옛 목록")])));
        assert_eq!(page.daily_concerts()[0].title, "새 목록");
    }

    #[tokio::test]
    async fn test_stale_month_result_is_ignored() {
        let mut page = controller();
        let older = page.begin_month_load();
        page.set_month(1).await;

        assert!(!page.finish_month_load(older.ticket, Ok(Vec::new())));
        assert_eq!(page.month_markers().len(), 1);
    }

    #[tokio::test]
    async fn test_deep_link_state_is_used_on_mount() {
        let mut page = CalendarPageController::new(FakeApi::default(), date(2024, 5, 15))
            .with_selected_date(date(2024, 7, 3))
            .with_regions(RegionFilter::from_regions(["대전"]));
        page.mount().await;

        let daejeon = Some(vec!["대전".to_string()]);
        assert_eq!(
            page.api().calls(),
            vec![
                Call::MonthlyDates(YearMonth::new(2024, 7).unwrap(), daejeon.clone()),
                Call::ByDate(date(2024, 7, 3), daejeon),
            ]
        );
    }

    #[test]
    fn test_region_sheet_toggle() {
        let mut page = controller();
        assert!(!page.is_region_sheet_open());
        page.open_region_sheet();
        assert!(page.is_region_sheet_open());
        page.close_region_sheet();
        assert!(!page.is_region_sheet_open());
    }
}
