//! 지역 필터
//!
//! "전체"는 특정 지역과 동시에 선택될 수 없다. 집합은 절대 비지 않는다.

use serde::{Deserialize, Serialize};

/// 전체 지역 센티넬
pub const ALL_REGIONS: &str = "전체";

/// 선택된 지역 집합（선택 순서 유지）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFilter {
    regions: Vec<String>,
}

impl Default for RegionFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl RegionFilter {
    pub fn all() -> Self {
        Self {
            regions: vec![ALL_REGIONS.to_string()],
        }
    }

    /// 지역 목록으로 생성（빈 목록이나 "전체"가 포함되면 전체）
    pub fn from_regions<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::all();
        for region in regions {
            let region = region.as_ref();
            if region == ALL_REGIONS {
                return Self::all();
            }
            if !filter.contains(region) {
                filter = filter.toggled(region);
            }
        }
        filter
    }

    pub fn is_all(&self) -> bool {
        self.regions.iter().any(|r| r == ALL_REGIONS)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// 토글 규칙 적용
    ///
    /// - "전체" 선택 → {전체}
    /// - 선택된 지역 해제 → 마지막 지역이었다면 {전체}
    /// - 새 지역 선택 → "전체" 제거 후 추가
    pub fn toggled(&self, region: &str) -> Self {
        if region == ALL_REGIONS {
            return Self::all();
        }

        let mut updated: Vec<String> = if self.contains(region) {
            self.regions.iter().filter(|r| *r != region).cloned().collect()
        } else {
            self.regions
                .iter()
                .filter(|r| *r != ALL_REGIONS)
                .cloned()
                .chain(std::iter::once(region.to_string()))
                .collect()
        };

        if updated.is_empty() {
            updated.push(ALL_REGIONS.to_string());
        }
        Self { regions: updated }
    }

    /// API 쿼리용 지역 목록（전체일 때는 None）
    pub fn as_query(&self) -> Option<Vec<String>> {
        if self.is_all() {
            None
        } else {
            Some(self.regions.clone())
        }
    }

    /// 버튼 라벨용 요약
    pub fn label(&self) -> String {
        self.regions.join(", ")
    }
}
