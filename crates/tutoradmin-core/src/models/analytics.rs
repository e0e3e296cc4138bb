use super::Timestamp;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: u64,
    pub total_tutors: u64,
    pub total_modules: u64,
    pub pending_payments: u64,
    pub total_revenue: f64,
    pub monthly_growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    TutorApproval,
    Payment,
    Ban,
    Enrollment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub message: String,
    pub timestamp: Timestamp,
    pub user_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at: Timestamp,
    pub priority: AnnouncementPriority,
    pub author: String,
}

/// An announcement before the server assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub priority: AnnouncementPriority,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentData {
    pub month: String,
    pub students: u64,
    pub tutors: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueData {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulePopularity {
    pub name: String,
    pub enrollments: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorStudentRatio {
    pub tutors: u64,
    pub students: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEarningTutor {
    pub name: String,
    pub earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostEnrolledModule {
    pub name: String,
    pub enrollments: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub enrollment_growth: Vec<EnrollmentData>,
    pub revenue_over_time: Vec<RevenueData>,
    pub tutor_student_ratio: TutorStudentRatio,
    pub top_modules: Vec<ModulePopularity>,
    pub highest_earning_tutor: TopEarningTutor,
    pub most_enrolled_module: MostEnrolledModule,
}

/// Inclusive reporting window for `/analytics/data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
