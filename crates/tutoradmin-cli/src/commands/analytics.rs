use super::output::print_json;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use tutoradmin_core::models::{AnnouncementPriority, DateRange, NewAnnouncement};
use tutoradmin_interaction::ApiClient;

#[derive(Clone, Copy, ValueEnum)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl From<Priority> for AnnouncementPriority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => AnnouncementPriority::Low,
            Priority::Medium => AnnouncementPriority::Medium,
            Priority::High => AnnouncementPriority::High,
        }
    }
}

#[derive(Subcommand)]
pub enum AnalyticsAction {
    /// Headline dashboard numbers
    Dashboard,
    Activities {
        #[arg(long)]
        limit: Option<u32>,
    },
    Announcements {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Publish an announcement
    Announce {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long, value_enum, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        author: String,
    },
    /// Full analytics report, optionally for a date range (YYYY-MM-DD)
    Report {
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
    },
    EnrollmentGrowth {
        #[arg(long)]
        months: Option<u32>,
    },
    Revenue {
        #[arg(long)]
        months: Option<u32>,
    },
    TopModules {
        #[arg(long)]
        limit: Option<u32>,
    },
}

pub async fn run(client: &ApiClient, action: AnalyticsAction) -> Result<()> {
    let analytics = client.analytics();
    match action {
        AnalyticsAction::Dashboard => print_json(&analytics.get_dashboard_stats().await?),
        AnalyticsAction::Activities { limit } => {
            print_json(&analytics.get_recent_activities(limit).await?)
        }
        AnalyticsAction::Announcements { limit } => {
            print_json(&analytics.get_announcements(limit).await?)
        }
        AnalyticsAction::Announce {
            title,
            message,
            priority,
            author,
        } => {
            let announcement = NewAnnouncement {
                title,
                message,
                priority: priority.into(),
                author,
            };
            print_json(&analytics.create_announcement(&announcement).await?)
        }
        AnalyticsAction::Report { from, to } => {
            let range = from.zip(to).map(|(from, to)| DateRange { from, to });
            print_json(&analytics.get_analytics_data(range.as_ref()).await?)
        }
        AnalyticsAction::EnrollmentGrowth { months } => {
            print_json(&analytics.get_enrollment_growth(months).await?)
        }
        AnalyticsAction::Revenue { months } => {
            print_json(&analytics.get_revenue_over_time(months).await?)
        }
        AnalyticsAction::TopModules { limit } => {
            print_json(&analytics.get_top_modules(limit).await?)
        }
    }
}
