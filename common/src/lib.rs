//! Concert Pages Common Library
//!
//! 캘린더・홈・스탬프 페이지 상태를 렌더링 툴킷과 무관하게 관리하는 컨트롤러와
//! 원격 API 계약, 공유 타입

pub mod api;
pub mod calendar;
pub mod error;
pub mod home;
pub mod month;
pub mod region;
pub mod request;
pub mod session;
pub mod stamp;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{ApiResult, CalendarApi, PerformanceApi, StampApi, UserApi};
pub use calendar::{CalendarPageController, DailyQuery, MonthQuery};
pub use error::{ApiError, Error, Result};
pub use home::{HomeLoad, HomePageController};
pub use month::{daily_title, date_param, YearMonth};
pub use region::{RegionFilter, ALL_REGIONS};
pub use request::{Generation, Ticket};
pub use session::Session;
pub use stamp::{Navigation, Overlay, PeriodRange, StampPageController};
pub use types::{
    AvailableStamp, CollectedStamp, ConcertDateMarker, PerformanceSummary, StampDetail, UserInfo,
};
