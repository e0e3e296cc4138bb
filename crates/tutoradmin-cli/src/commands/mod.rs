pub mod analytics;
pub mod auth;
pub mod mail;
pub mod output;
pub mod payments;
pub mod students;
pub mod tutors;

use chrono::{DateTime, Utc};
use clap::Args;
use tutoradmin_core::models::{Pagination, TableFilter};

/// Table filter flags shared by the list commands.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// RFC 3339 start of the date range; needs --to
    #[arg(long, requires = "to")]
    pub from: Option<DateTime<Utc>>,
    /// RFC 3339 end of the date range; needs --from
    #[arg(long, requires = "from")]
    pub to: Option<DateTime<Utc>>,
}

impl FilterArgs {
    /// `None` when no flag was given, so the request carries no filter at all.
    pub fn to_filter(&self) -> Option<TableFilter> {
        if self.search.is_none() && self.status.is_none() && self.from.is_none() {
            return None;
        }
        let mut filter = TableFilter::search(self.search.clone().unwrap_or_default());
        if let Some(status) = &self.status {
            filter = filter.with_status(status.clone());
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            filter = filter.with_date_range(from, to);
        }
        Some(filter)
    }
}

#[derive(Args, Debug)]
pub struct PageArgs {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl PageArgs {
    pub fn to_pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.page_size.is_none() {
            return None;
        }
        let defaults = Pagination::default();
        Some(Pagination::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        ))
    }
}
