//! Dashboard statistics, activity feed, announcements and reporting series.

use crate::client::{ApiClient, RequestOptions};
use serde::Serialize;
use tutoradmin_core::error::Result;
use tutoradmin_core::models::{
    AnalyticsData, Announcement, DashboardStats, DateRange, EnrollmentData, ModulePopularity,
    NewAnnouncement, RecentActivity, RevenueData,
};

pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;
pub const DEFAULT_GROWTH_MONTHS: u32 = 6;
pub const DEFAULT_TOP_MODULES: u32 = 5;

#[derive(Serialize)]
struct LimitQuery {
    limit: Option<u32>,
}

#[derive(Serialize)]
struct MonthsQuery {
    months: u32,
}

pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.client
            .get("/analytics/dashboard", RequestOptions::new())
            .await
    }

    /// Latest activity entries; `None` asks for [`DEFAULT_ACTIVITY_LIMIT`].
    pub async fn get_recent_activities(&self, limit: Option<u32>) -> Result<Vec<RecentActivity>> {
        let query = LimitQuery {
            limit: Some(limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT)),
        };
        self.client
            .get("/analytics/activities", RequestOptions::new().query(&query)?)
            .await
    }

    /// Announcements, newest first. Without a limit the server decides.
    pub async fn get_announcements(&self, limit: Option<u32>) -> Result<Vec<Announcement>> {
        self.client
            .get(
                "/analytics/announcements",
                RequestOptions::new().query(&LimitQuery { limit })?,
            )
            .await
    }

    pub async fn create_announcement(&self, announcement: &NewAnnouncement) -> Result<Announcement> {
        self.client
            .post(
                "/analytics/announcements",
                RequestOptions::new().json(announcement)?,
            )
            .await
    }

    pub async fn get_analytics_data(&self, range: Option<&DateRange>) -> Result<AnalyticsData> {
        self.client
            .get("/analytics/data", RequestOptions::new().query(&range)?)
            .await
    }

    pub async fn get_enrollment_growth(&self, months: Option<u32>) -> Result<Vec<EnrollmentData>> {
        let query = MonthsQuery {
            months: months.unwrap_or(DEFAULT_GROWTH_MONTHS),
        };
        self.client
            .get(
                "/analytics/enrollment-growth",
                RequestOptions::new().query(&query)?,
            )
            .await
    }

    pub async fn get_revenue_over_time(&self, months: Option<u32>) -> Result<Vec<RevenueData>> {
        let query = MonthsQuery {
            months: months.unwrap_or(DEFAULT_GROWTH_MONTHS),
        };
        self.client
            .get("/analytics/revenue", RequestOptions::new().query(&query)?)
            .await
    }

    pub async fn get_top_modules(&self, limit: Option<u32>) -> Result<Vec<ModulePopularity>> {
        let query = LimitQuery {
            limit: Some(limit.unwrap_or(DEFAULT_TOP_MODULES)),
        };
        self.client
            .get("/analytics/top-modules", RequestOptions::new().query(&query)?)
            .await
    }
}
