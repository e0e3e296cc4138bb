//! Data-transfer records exchanged with the backend.
//!
//! The server is the system of record; these types carry no behaviour beyond
//! (de)serialization and a few merge helpers.

mod admin;
mod analytics;
mod filter;
mod mail;
mod payment;
mod student;
mod timestamp;
mod tutor;

pub use admin::{Admin, AdminPatch, AdminRole, AuthResponse, LoginCredentials};
pub use analytics::{
    ActivityType, AnalyticsData, Announcement, AnnouncementPriority, DashboardStats, DateRange,
    EnrollmentData, ModulePopularity, MostEnrolledModule, NewAnnouncement, RecentActivity,
    RevenueData, TopEarningTutor, TutorStudentRatio,
};
pub use filter::{FilterDateRange, Pagination, TableFilter};
pub use mail::{Attachment, EmailContent, EmailPayload, EmailTemplate, UserKind};
pub use payment::{
    BankDetails, PaymentHistory, PaymentHistoryPage, PaymentRequest, PaymentRequestPage,
    PaymentStatus, PaymentSummary,
};
pub use student::{Student, StudentPage, StudentStats, StudentStatus, StudentUpdate};
pub use timestamp::Timestamp;
pub use tutor::{Tutor, TutorPage, TutorStats, TutorStatus, TutorUpdate};
