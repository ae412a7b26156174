//! 달력 월 계산

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::Error;

/// 다루는 연도 범위（네 자리 연도）
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// 연월（month는 1〜12, year는 [`YEAR_RANGE`] 안）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (YEAR_RANGE.contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// 범위 밖 연도는 가장 가까운 끝으로 맞춘다
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end()),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// delta개월 이동（연도 경계를 넘어 감김, 범위 끝에서 멈춤）
    pub fn shift(self, delta: i32) -> Self {
        let first = i64::from(*YEAR_RANGE.start()) * 12;
        let last = i64::from(*YEAR_RANGE.end()) * 12 + 11;
        let index = (i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta))
            .clamp(first, last);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// "yyyy"
    pub fn year_param(&self) -> String {
        format!("{:04}", self.year)
    }

    /// "MM"
    pub fn month_param(&self) -> String {
        format!("{:02}", self.month)
    }

    /// 월 이동 바 제목（"5월"）
    pub fn title(&self) -> String {
        format!("{}월", self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// "YYYY-MM" 형식
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Config(format!("연월 형식이 올바르지 않습니다: {}", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

/// API 쿼리용 날짜 문자열（yyyy-MM-dd）
pub fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 일별 목록 제목（"5월 15일 공연"）
pub fn daily_title(date: NaiveDate) -> String {
    format!("{}월 {}일 공연", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
    }

    #[test]
    fn test_new_rejects_out_of_range_year() {
        assert!(YearMonth::new(0, 5).is_none());
        assert!(YearMonth::new(10_000, 5).is_none());
        assert!("200000000-05".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_shift_saturates_at_range_ends() {
        assert_eq!(ym(9999, 12).shift(1), ym(9999, 12));
        assert_eq!(ym(9999, 5).shift(i32::MAX), ym(9999, 12));
        assert_eq!(ym(1, 1).shift(-1), ym(1, 1));
        assert_eq!(ym(2024, 5).shift(i32::MIN), ym(1, 1));
    }

    #[test]
    fn test_shift_within_year() {
        assert_eq!(ym(2024, 5).shift(1), ym(2024, 6));
        assert_eq!(ym(2024, 5).shift(-1), ym(2024, 4));
    }

    #[test]
    fn test_january_minus_one_is_previous_december() {
        assert_eq!(ym(2024, 1).shift(-1), ym(2023, 12));
    }

    #[test]
    fn test_december_plus_one_is_next_january() {
        assert_eq!(ym(2023, 12).shift(1), ym(2024, 1));
    }

    #[test]
    fn test_shift_sequence_equals_net_delta() {
        let start = ym(2024, 5);
        let deltas = [1, 1, -1, -1, -1, -1, -1, -1, 1, -1, -1, -1];
        let mut current = start;
        for d in deltas {
            current = current.shift(d);
        }
        let net: i32 = deltas.iter().sum();
        assert_eq!(current, start.shift(net));
        assert_eq!(current, ym(2023, 11));
    }

    #[test]
    fn test_params_and_title() {
        let m = ym(2024, 5);
        assert_eq!(m.year_param(), "2024");
        assert_eq!(m.month_param(), "05");
        assert_eq!(m.title(), "5월");
        assert_eq!(m.to_string(), "2024-05");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-05".parse::<YearMonth>().unwrap(), ym(2024, 5));
        assert!("2024/05".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_date_helpers() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(date_param(date), "2024-05-15");
        assert_eq!(daily_title(date), "5월 15일 공연");
        assert_eq!(YearMonth::of(date), ym(2024, 5));
    }
}
