pub mod curriculum;
pub mod filter;
pub mod instructor;
pub mod models;

pub use filter::{CourseFilter, SortKey, filter_courses};
pub use models::{Course, Lecture, Level, Section};
