//! reqwest 기반 API 클라이언트

use async_trait::async_trait;
use chrono::NaiveDate;
use concert_pages_common::{
    ApiError, ApiResult, AvailableStamp, CalendarApi, CollectedStamp, ConcertDateMarker,
    PerformanceApi, PerformanceSummary, Session, StampApi, StampDetail, UserApi, UserInfo,
    YearMonth,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::{
    collect_stamp_path, decode_body, monthly_dates_query, performances_by_date_query,
    stamp_detail_path, ticket_opening_query, Query, AVAILABLE_STAMPS_PATH, COLLECTED_STAMPS_PATH,
    MONTHLY_DATES_PATH, PERFORMANCES_BY_DATE_PATH, RECENT_PATH, RECOMMENDED_PATH, TICKET_OPENING_PATH,
    TODAY_PATH, USER_INFO_PATH,
};
use crate::error::Result;

pub struct HttpApi {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpApi {
    pub fn new(base_url: &str, session: Session, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "API 응답");
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query) -> ApiResult<T> {
        let builder = self
            .request(Method::GET, path, self.session.access_token())
            .query(query);
        self.read_json(builder).await
    }

    async fn read_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_body(body)
    }
}

#[async_trait(?Send)]
impl CalendarApi for HttpApi {
    async fn fetch_monthly_performance_dates(
        &self,
        month: YearMonth,
        regions: Option<&[String]>,
    ) -> ApiResult<Vec<ConcertDateMarker>> {
        self.get_json(MONTHLY_DATES_PATH, &monthly_dates_query(month, regions))
            .await
    }

    async fn fetch_performances_by_date(
        &self,
        date: NaiveDate,
        regions: Option<&[String]>,
    ) -> ApiResult<Vec<PerformanceSummary>> {
        self.get_json(PERFORMANCES_BY_DATE_PATH, &performances_by_date_query(date, regions))
            .await
    }
}

#[async_trait(?Send)]
impl PerformanceApi for HttpApi {
    async fn fetch_today_performances(&self) -> ApiResult<Vec<PerformanceSummary>> {
        self.get_json(TODAY_PATH, &Query::new()).await
    }

    async fn fetch_recent_performances(&self, limit: usize) -> ApiResult<Vec<PerformanceSummary>> {
        self.get_json(RECENT_PATH, &vec![("limit", limit.to_string())])
            .await
    }

    async fn fetch_ticket_opening_performances(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ApiResult<Vec<PerformanceSummary>> {
        self.get_json(TICKET_OPENING_PATH, &ticket_opening_query(from, to))
            .await
    }

    async fn fetch_recommended_performances(
        &self,
        access_token: Option<&str>,
    ) -> ApiResult<Vec<PerformanceSummary>> {
        let builder = self.request(Method::GET, RECOMMENDED_PATH, access_token);
        self.read_json(builder).await
    }
}

#[async_trait(?Send)]
impl UserApi for HttpApi {
    async fn fetch_user_info(&self) -> ApiResult<UserInfo> {
        // 토큰이 없으면 요청할 필요 없이 로그아웃 상태
        if !self.session.has_token() {
            return Err(ApiError::Unauthorized);
        }
        self.get_json(USER_INFO_PATH, &Query::new()).await
    }
}

#[async_trait(?Send)]
impl StampApi for HttpApi {
    async fn fetch_collected_stamps(
        &self,
        start_month: u32,
        end_month: u32,
    ) -> ApiResult<Vec<CollectedStamp>> {
        let query = vec![
            ("startMonth", start_month.to_string()),
            ("endMonth", end_month.to_string()),
        ];
        self.get_json(COLLECTED_STAMPS_PATH, &query).await
    }

    async fn fetch_available_stamps(&self, days: u32) -> ApiResult<Vec<AvailableStamp>> {
        self.get_json(AVAILABLE_STAMPS_PATH, &vec![("days", days.to_string())])
            .await
    }

    async fn collect_stamp(&self, stamp_id: i64) -> ApiResult<()> {
        let builder = self.request(
            Method::POST,
            &collect_stamp_path(stamp_id),
            self.session.access_token(),
        );
        self.send(builder).await.map(|_| ())
    }

    async fn fetch_stamp_detail(&self, stamp_id: i64) -> ApiResult<StampDetail> {
        self.get_json(&stamp_detail_path(stamp_id), &Query::new())
            .await
    }
}
