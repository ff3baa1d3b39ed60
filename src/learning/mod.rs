pub mod duration;
pub mod models;
pub mod player;
pub mod progress;

pub use duration::format_duration;
pub use models::EnrollmentRecord;
pub use progress::{DashboardStats, course_progress, percent_complete};
