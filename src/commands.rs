//! 서브커맨드별 페이지 구동

use chrono::NaiveDate;
use concert_pages_common::{
    CalendarPageController, HomeLoad, HomePageController, Overlay, PeriodRange, RegionFilter,
    StampPageController, YearMonth,
};
use dialoguer::{Confirm, Select};

use crate::api::HttpApi;
use crate::error::{AppError, Result};
use crate::render;

/// 캘린더 인자
pub struct CalendarArgs {
    pub month: Option<String>,
    pub date: Option<String>,
    pub regions: Vec<String>,
    pub month_delta: i32,
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Config(format!("날짜 형식이 올바르지 않습니다（YYYY-MM-DD）: {}", s)))
}

/// 지역 인자를 순서대로 토글해 필터를 만든다
pub fn region_filter_from_args(regions: &[String]) -> RegionFilter {
    regions
        .iter()
        .fold(RegionFilter::all(), |filter, region| filter.toggled(region))
}

pub async fn run_calendar(api: HttpApi, today: NaiveDate, args: CalendarArgs) -> Result<()> {
    let mut page = CalendarPageController::new(api, today)
        .with_regions(region_filter_from_args(&args.regions));

    if let Some(date) = args.date.as_deref() {
        page = page.with_selected_date(parse_date(date)?);
    }
    if let Some(month) = args.month.as_deref() {
        page = page.with_month(month.parse::<YearMonth>()?);
    }

    page.mount().await;
    if args.month_delta != 0 {
        page.set_month(args.month_delta).await;
    }

    print!("{}", render::render_calendar(&page));
    Ok(())
}

pub async fn run_home(
    api: HttpApi,
    today: NaiveDate,
    recent_limit: usize,
    ticket_window_days: i64,
) -> Result<()> {
    let session = api.session().clone();
    let mut page = HomePageController::new(api, today).with_limits(recent_limit, ticket_window_days);

    if let HomeLoad::Failed(e) = page.load(&session).await {
        println!("⚠ 홈 데이터를 불러오지 못했습니다: {}", e);
    }

    print!("{}", render::render_home(&page));
    Ok(())
}

/// 기간 인자（빠진 값은 올해 1〜12월로 채움）
pub fn period_from_args(
    today_year: i32,
    start_year: Option<i32>,
    start_month: Option<u32>,
    end_year: Option<i32>,
    end_month: Option<u32>,
) -> PeriodRange {
    let default = PeriodRange::whole_year(today_year);
    PeriodRange {
        start_year: start_year.unwrap_or(default.start_year),
        start_month: start_month.unwrap_or(default.start_month),
        end_year: end_year.unwrap_or(default.end_year),
        end_month: end_month.unwrap_or(default.end_month),
    }
}

pub async fn run_stamp_list(api: HttpApi, today: NaiveDate, period: PeriodRange) -> Result<()> {
    let mut page = StampPageController::new(api, today).with_period(period);
    page.mount().await;
    print!("{}", render::render_stamps(&page));
    Ok(())
}

pub async fn run_stamp_collect(
    api: HttpApi,
    today: NaiveDate,
    available_days: u32,
) -> Result<()> {
    let mut page = StampPageController::new(api, today).with_available_days(available_days);
    page.mount().await;

    if !page.press_collect_button().await {
        return Err(AppError::LoginRequired);
    }

    let stamps = page.available_stamps().to_vec();
    if stamps.is_empty() {
        println!("최근 {}일 안에 찍을 수 있는 스탬프가 없습니다.", page.available_days());
        page.close_overlay();
        return Ok(());
    }

    let labels: Vec<String> = stamps.iter().map(render::available_stamp_label).collect();
    let Some(index) = Select::new()
        .with_prompt("스탬프를 고르세요")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        page.close_overlay();
        return Ok(());
    };

    page.choose_stamp(&stamps[index]);
    match page.overlay() {
        Overlay::AlreadyCollected => {
            println!("이미 수집한 스탬프입니다.");
            page.close_overlay();
        }
        Overlay::Confirm(stamp) => {
            let proceed = Confirm::new()
                .with_prompt(format!("'{}' 스탬프를 찍을까요?", stamp.title))
                .default(true)
                .interact()?;
            if !proceed {
                page.cancel_confirm();
            } else if page.confirm_collect().await {
                println!("✔ 스탬프를 찍었습니다");
            } else if let Some(alert) = page.take_alert() {
                println!("⚠ {}", alert);
            } else if !page.is_logged_in() {
                return Err(AppError::LoginRequired);
            }
        }
        _ => {}
    }

    print!("{}", render::render_stamps(&page));
    Ok(())
}

pub async fn run_stamp_detail(api: HttpApi, today: NaiveDate, stamp_id: i64) -> Result<()> {
    let mut page = StampPageController::new(api, today);
    page.mount().await;
    if !page.is_logged_in() {
        return Err(AppError::LoginRequired);
    }

    let Some(stamp) = page
        .collected_stamps()
        .into_iter()
        .find(|s| s.id == stamp_id)
    else {
        println!("수집한 스탬프 중에 id {} 가 없습니다.", stamp_id);
        return Ok(());
    };

    page.open_detail(stamp);
    match page.load_detail().await {
        Some(detail) => print!("{}", render::render_stamp_detail(detail)),
        None => print!("{}", render::render_stamps(&page)),
    }
    Ok(())
}
