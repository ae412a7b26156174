//! 스탬프 페이지 컨트롤러
//!
//! ## 상태
//! - 로그인 여부: "who am I" 응답으로 판정, 포커스/스토리지 이벤트마다 재확인
//! - 기간 필터: 바뀌면 수집한 스탬프를 다시 조회
//! - 오버레이: 한 번에 하나만 열린다
//!
//! 인증된 요청에서 401을 받으면 로그아웃 상태로 내리고 해당 흐름을 멈춘다.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, error, info};

use crate::api::{ApiResult, StampApi, UserApi};
use crate::request::{Generation, Ticket};
use crate::types::{AvailableStamp, CollectedStamp, StampDetail};

/// 수집 가능 스탬프 조회 기간（일）
pub const AVAILABLE_STAMP_DAYS: u32 = 30;

pub const LOAD_FAILED_MESSAGE: &str = "스탬프를 불러오는데 실패했습니다.";
pub const COLLECT_FAILED_MESSAGE: &str = "스탬프 수집에 실패했습니다.";

/// 열린 오버레이
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    /// 수집할 스탬프 고르기
    Picker,
    /// 아직 수집하지 않은 스탬프 수집 확인
    Confirm(AvailableStamp),
    /// 이미 수집한 스탬프 안내
    AlreadyCollected,
    /// 수집한 스탬프 상세
    Detail(CollectedStamp),
    PeriodEditor,
}

/// 조회 기간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start_year: i32,
    pub start_month: u32,
    pub end_year: i32,
    pub end_month: u32,
}

impl PeriodRange {
    /// 올해 1월〜12월
    pub fn whole_year(year: i32) -> Self {
        Self {
            start_year: year,
            start_month: 1,
            end_year: year,
            end_month: 12,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{}.{:02} ~ {}.{:02}",
            self.start_year, self.start_month, self.end_year, self.end_month
        )
    }
}

/// 페이지 밖으로의 이동
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Performance(i64),
}

pub struct StampPageController<A> {
    api: A,
    logged_in: bool,
    period: PeriodRange,
    overlay: Overlay,
    collected: Vec<CollectedStamp>,
    available: Vec<AvailableStamp>,
    detail: Option<StampDetail>,
    loading: bool,
    error: Option<String>,
    alert: Option<String>,
    available_days: u32,
    collected_generation: Generation,
    available_generation: Generation,
}

impl<A: StampApi + UserApi> StampPageController<A> {
    pub fn new(api: A, today: NaiveDate) -> Self {
        Self {
            api,
            logged_in: false,
            period: PeriodRange::whole_year(today.year()),
            overlay: Overlay::None,
            collected: Vec::new(),
            available: Vec::new(),
            detail: None,
            loading: true,
            error: None,
            alert: None,
            available_days: AVAILABLE_STAMP_DAYS,
            collected_generation: Generation::default(),
            available_generation: Generation::default(),
        }
    }

    /// 진입 시 조회 기간
    pub fn with_period(mut self, period: PeriodRange) -> Self {
        self.period = period;
        self
    }

    /// 수집 가능 스탬프를 며칠 전까지 볼지
    pub fn with_available_days(mut self, days: u32) -> Self {
        self.available_days = days;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// 로그아웃 상태면 로그인 안내를 띄운다
    pub fn shows_login_prompt(&self) -> bool {
        !self.logged_in
    }

    pub fn period(&self) -> PeriodRange {
        self.period
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn available_stamps(&self) -> &[AvailableStamp] {
        &self.available
    }

    pub fn detail(&self) -> Option<&StampDetail> {
        self.detail.as_ref()
    }

    /// 사용자에게 띄울 경고（한 번 꺼내면 사라짐）
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// 수집한 스탬프（날짜 내림차순, 호출할 때마다 정렬）
    pub fn collected_stamps(&self) -> Vec<CollectedStamp> {
        let mut stamps = self.collected.clone();
        stamps.sort_by(|a, b| b.date.cmp(&a.date));
        stamps
    }

    /// 페이지 진입: 로그인 확인 후 로그인 상태면 수집한 스탬프 로드
    pub async fn mount(&mut self) {
        self.sync_session().await;
    }

    /// 창 포커스（다른 탭에서 로그인 상태가 바뀐 경우）
    pub async fn on_window_focus(&mut self) {
        self.sync_session().await;
    }

    /// 스토리지 이벤트（다른 탭에서 로그아웃한 경우）
    pub async fn on_storage_event(&mut self) {
        self.sync_session().await;
    }

    async fn sync_session(&mut self) {
        let logged_in = match self.api.fetch_user_info().await {
            Ok(me) => me.is_identified(),
            Err(e) => {
                debug!("사용자 정보 조회 실패: {}", e);
                false
            }
        };
        self.set_logged_in(logged_in).await;
    }

    /// 로그인 상태 반영（false → true로 바뀌면 수집한 스탬프 재조회）
    async fn set_logged_in(&mut self, logged_in: bool) {
        let became_logged_in = logged_in && !self.logged_in;
        self.logged_in = logged_in;
        if became_logged_in {
            info!("로그인 상태 확인됨");
            self.load_collected().await;
        }
    }

    fn demote_session(&mut self) {
        info!("인증 만료: 로그아웃 상태로 전환");
        self.logged_in = false;
    }

    /// 수집한 스탬프 요청 시작（로그아웃 상태면 None）
    pub fn begin_collected_load(&mut self) -> Option<(Ticket, u32, u32)> {
        if !self.logged_in {
            return None;
        }
        self.loading = true;
        Some((
            self.collected_generation.issue(),
            self.period.start_month,
            self.period.end_month,
        ))
    }

    /// 수집한 스탬프 응답 반영（이미 대체된 요청이면 false）
    pub fn finish_collected_load(
        &mut self,
        ticket: Ticket,
        result: ApiResult<Vec<CollectedStamp>>,
    ) -> bool {
        if !self.collected_generation.is_current(ticket) {
            debug!("대체된 스탬프 목록 응답 무시");
            return false;
        }
        self.loading = false;
        match result {
            Ok(stamps) => {
                self.collected = stamps;
                self.error = None;
            }
            Err(e) if e.is_unauthorized() => self.demote_session(),
            Err(e) => {
                error!("수집한 스탬프 로딩 실패: {}", e);
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// 수집한 스탬프 조회
    pub async fn load_collected(&mut self) {
        let Some((ticket, start_month, end_month)) = self.begin_collected_load() else {
            return;
        };
        let result = self.api.fetch_collected_stamps(start_month, end_month).await;
        self.finish_collected_load(ticket, result);
    }

    /// 스탬프 찍기 버튼
    ///
    /// 로그아웃 상태면 아무것도 열지 않고 false를 돌려준다（로그인 안내 표시）.
    pub async fn press_collect_button(&mut self) -> bool {
        if !self.logged_in {
            return false;
        }
        self.overlay = Overlay::Picker;
        self.load_available().await;
        true
    }

    /// 수집 가능한 스탬프 조회（피커가 열려 있고 로그인 상태일 때만）
    pub async fn load_available(&mut self) {
        let Some(ticket) = self.begin_available_load() else {
            return;
        };
        let result = self.api.fetch_available_stamps(self.available_days).await;
        self.finish_available_load(ticket, result);
    }

    /// 조회할 상황이 아니면 None
    pub fn begin_available_load(&mut self) -> Option<Ticket> {
        if !self.logged_in || self.overlay != Overlay::Picker {
            return None;
        }
        Some(self.available_generation.issue())
    }

    /// 조회 기간（일）
    pub fn available_days(&self) -> u32 {
        self.available_days
    }

    pub fn finish_available_load(
        &mut self,
        ticket: Ticket,
        result: ApiResult<Vec<AvailableStamp>>,
    ) -> bool {
        if !self.available_generation.is_current(ticket) {
            debug!("대체된 수집 가능 스탬프 응답 무시");
            return false;
        }
        match result {
            Ok(list) => {
                debug!(count = list.len(), "수집 가능 스탬프 응답");
                self.available = list;
            }
            Err(e) if e.is_unauthorized() => self.demote_session(),
            Err(e) => {
                error!("수집 가능 스탬프 조회 오류: {}", e);
                self.available.clear();
            }
        }
        true
    }

    /// 피커에서 스탬프 선택
    pub fn choose_stamp(&mut self, stamp: &AvailableStamp) {
        if self.overlay != Overlay::Picker {
            return;
        }
        self.overlay = if stamp.is_collected {
            Overlay::AlreadyCollected
        } else {
            Overlay::Confirm(stamp.clone())
        };
    }

    pub fn cancel_confirm(&mut self) {
        if matches!(self.overlay, Overlay::Confirm(_)) {
            self.overlay = Overlay::None;
        }
    }

    /// 수집 확인
    ///
    /// 성공하면 수집한 스탬프를 다시 불러오고 오버레이를 닫는다.
    /// 실패하면 경고를 남기고 확인 창은 그대로 둔다.
    pub async fn confirm_collect(&mut self) -> bool {
        let Overlay::Confirm(stamp) = &self.overlay else {
            return false;
        };
        if !self.logged_in {
            return false;
        }
        let stamp_id = stamp.id;

        if let Err(e) = self.api.collect_stamp(stamp_id).await {
            if e.is_unauthorized() {
                self.demote_session();
            } else {
                error!("스탬프 수집 실패: {}", e);
                self.alert = Some(COLLECT_FAILED_MESSAGE.to_string());
            }
            return false;
        }

        info!(stamp_id, "스탬프 수집 완료");
        self.overlay = Overlay::None;
        self.load_collected().await;
        true
    }

    /// 수집한 스탬프 타일 클릭
    pub fn open_detail(&mut self, stamp: CollectedStamp) {
        self.detail = None;
        self.overlay = Overlay::Detail(stamp);
    }

    /// 상세 오버레이의 스탬프 상세 조회
    pub async fn load_detail(&mut self) -> Option<&StampDetail> {
        let Overlay::Detail(stamp) = &self.overlay else {
            return None;
        };
        let stamp_id = stamp.id;
        match self.api.fetch_stamp_detail(stamp_id).await {
            Ok(detail) => self.detail = Some(detail),
            Err(e) if e.is_unauthorized() => self.demote_session(),
            Err(e) => error!("스탬프 상세 조회 실패: {}", e),
        }
        self.detail.as_ref()
    }

    /// 상세 창의 포스터 클릭（공연 id가 없으면 아무 일도 없음）
    pub fn poster_click(&mut self, performance_id: Option<i64>) -> Option<Navigation> {
        let id = performance_id?;
        self.close_overlay();
        Some(Navigation::Performance(id))
    }

    pub fn open_period_editor(&mut self) {
        self.overlay = Overlay::PeriodEditor;
    }

    /// 기간 변경 후 수집한 스탬프 재조회
    pub async fn change_period(&mut self, period: PeriodRange) {
        if period == self.period {
            return;
        }
        self.period = period;
        self.load_collected().await;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
        self.detail = None;
    }
}
