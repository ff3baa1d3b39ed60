use crate::catalog::models::Lecture;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student's enrollment in one course.
///
/// The backend also sends an `isCompleted` flag; it is ignored; completion
/// is derived from the lecture completion set against the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    #[serde(alias = "course")]
    pub course_id: String,
    #[serde(default)]
    pub completed_lecture_ids: BTreeSet<String>,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
}

impl EnrollmentRecord {
    pub fn new(course_id: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            completed_lecture_ids: BTreeSet::new(),
            last_accessed: None,
        }
    }

    pub fn has_completed(&self, lecture_id: &str) -> bool {
        self.completed_lecture_ids.contains(lecture_id)
    }

    /// Returns false if the lecture was already in the set.
    pub fn mark_completed(&mut self, lecture_id: &str) -> bool {
        self.completed_lecture_ids.insert(lecture_id.to_string())
    }
}

/// Completion state of a lecture. An enrollment's completion set, when
/// available, overrides the flag carried on the lecture itself.
pub fn lecture_completed(lecture: &Lecture, enrollment: Option<&EnrollmentRecord>) -> bool {
    match enrollment {
        Some(record) => record.has_completed(&lecture.id),
        None => lecture.is_completed,
    }
}

/// Request body for marking a lecture complete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteLectureRequest {
    pub watched_seconds: Option<u64>,
}
