//! 페이지 상태를 터미널 텍스트로 출력

use concert_pages_common::{
    AvailableStamp, CalendarApi, CalendarPageController, CollectedStamp, HomePageController,
    Overlay, PerformanceApi, PerformanceSummary, StampApi, StampDetail, StampPageController,
    UserApi,
};
use std::fmt::Write;

const EMPTY: &str = "  (공연 없음)";

fn performance_line(p: &PerformanceSummary) -> String {
    let mut line = format!("  - [{}] {}", p.id, p.title);
    if let Some(venue) = &p.venue {
        let _ = write!(line, " @ {}", venue);
    }
    match (p.start_date, p.end_date) {
        (Some(start), Some(end)) if start != end => {
            let _ = write!(line, " ({} ~ {})", start, end);
        }
        (Some(start), _) => {
            let _ = write!(line, " ({})", start);
        }
        _ => {}
    }
    line
}

fn performance_section(out: &mut String, title: &str, list: &[PerformanceSummary]) {
    let _ = writeln!(out, "{}", title);
    if list.is_empty() {
        let _ = writeln!(out, "{}", EMPTY);
    }
    for p in list {
        let _ = writeln!(out, "{}", performance_line(p));
    }
}

pub fn render_calendar<A: CalendarApi>(page: &CalendarPageController<A>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "◀ {} ▶  ({})", page.month_title(), page.current_month());
    let _ = writeln!(out, "지역: {}", page.regions().label());

    let days: Vec<String> = page
        .month_markers()
        .iter()
        .map(|m| match m.count {
            Some(count) => format!("{}({})", m.date.format("%-d"), count),
            None => m.date.format("%-d").to_string(),
        })
        .collect();
    if days.is_empty() {
        let _ = writeln!(out, "공연 있는 날: 없음");
    } else {
        let _ = writeln!(out, "공연 있는 날: {}", days.join(", "));
    }

    if let Some(title) = page.daily_title() {
        let _ = writeln!(out);
        performance_section(&mut out, &title, page.daily_concerts());
    }
    out
}

pub fn render_home<A: PerformanceApi>(page: &HomePageController<A>) -> String {
    let mut out = String::new();
    performance_section(&mut out, &page.today_heading(), page.today_performances());
    let _ = writeln!(out);
    performance_section(&mut out, "새로 올라온 공연", page.recent_performances());
    let _ = writeln!(out);
    performance_section(&mut out, "티켓 오픈 예정", page.ticket_open_performances());
    for p in page.ticket_open_performances() {
        if let Some(open) = &p.ticket_open_date {
            let _ = writeln!(out, "    {} 티켓 오픈: {}", p.title, open);
        }
    }
    let _ = writeln!(out);
    performance_section(&mut out, "추천 공연", page.recommended_performances());
    out
}

pub fn collected_stamp_line(stamp: &CollectedStamp) -> String {
    let date = stamp
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("  [{}] {}  {}", stamp.id, date, stamp.place)
}

pub fn available_stamp_label(stamp: &AvailableStamp) -> String {
    let mark = if stamp.is_collected { " (수집 완료)" } else { "" };
    format!("{} - {}{}", stamp.title, stamp.place, mark)
}

pub fn render_stamps<A: StampApi + UserApi>(page: &StampPageController<A>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "기간: {}", page.period().label());

    if page.shows_login_prompt() {
        let _ = writeln!(out, "로그인하고 스탬프를 모아보세요.");
        return out;
    }
    if let Some(error) = page.error() {
        let _ = writeln!(out, "{}", error);
    }

    let stamps = page.collected_stamps();
    if stamps.is_empty() {
        let _ = writeln!(out, "  (수집한 스탬프 없음)");
    }
    for stamp in &stamps {
        let _ = writeln!(out, "{}", collected_stamp_line(stamp));
    }

    match page.overlay() {
        Overlay::AlreadyCollected => {
            let _ = writeln!(out, "이미 수집한 스탬프입니다.");
        }
        Overlay::Detail(stamp) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", collected_stamp_line(stamp));
        }
        _ => {}
    }
    out
}

pub fn render_stamp_detail(detail: &StampDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", detail.id, detail.title);
    if !detail.place.is_empty() {
        let _ = writeln!(out, "장소: {}", detail.place);
    }
    if let Some(date) = detail.date {
        let _ = writeln!(out, "날짜: {}", date);
    }
    if let Some(id) = detail.performance_id {
        let _ = writeln!(out, "공연: /performance/{}", id);
    }
    out
}
