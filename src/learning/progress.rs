use crate::catalog::curriculum::total_duration_secs;
use crate::catalog::models::Course;
use crate::learning::models::EnrollmentRecord;
use serde::Serialize;

/// `round(100 * completed / total)` with halves rounding up, clamped to
/// 0..=100. A course without lectures is 0% complete.
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u8
}

/// Number of the course's lectures present in the enrollment's completion
/// set. Ids for lectures that no longer exist in the course are ignored.
pub fn completed_lecture_count(course: &Course, enrollment: &EnrollmentRecord) -> usize {
    course
        .lectures()
        .filter(|l| enrollment.has_completed(&l.id))
        .count()
}

pub fn course_progress(course: &Course, enrollment: &EnrollmentRecord) -> u8 {
    percent_complete(
        completed_lecture_count(course, enrollment),
        course.lecture_count(),
    )
}

/// Every lecture done. Not the same as `course_progress == 100`, which
/// rounding can reach with a lecture still open.
pub fn is_course_completed(course: &Course, enrollment: &EnrollmentRecord) -> bool {
    let total = course.lecture_count();
    total > 0 && completed_lecture_count(course, enrollment) == total
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total > 0 && completed >= total {
            ProgressStatus::Completed
        } else if completed == 0 {
            ProgressStatus::NotStarted
        } else {
            ProgressStatus::InProgress
        }
    }
}

/// One row of the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub title: String,
    pub completed_lectures: usize,
    pub total_lectures: usize,
    pub percent: u8,
    pub status: ProgressStatus,
    pub watched_secs: u64,
    pub total_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub courses: Vec<CourseProgress>,
    pub completed_courses: usize,
    pub in_progress_courses: usize,
    pub not_started_courses: usize,
    pub watched_secs: u64,
}

impl DashboardStats {
    /// Build the dashboard from a snapshot of enrollments and the courses
    /// they refer to. Enrollments whose course is not in `courses` are
    /// skipped. Row order follows `enrollments`.
    pub fn compute(courses: &[Course], enrollments: &[EnrollmentRecord]) -> Self {
        let mut stats = DashboardStats::default();

        for enrollment in enrollments {
            let Some(course) = courses.iter().find(|c| c.id == enrollment.course_id) else {
                tracing::warn!(
                    course_id = %enrollment.course_id,
                    "enrollment refers to an unknown course, skipping"
                );
                continue;
            };

            let completed = completed_lecture_count(course, enrollment);
            let total = course.lecture_count();
            let percent = percent_complete(completed, total);
            let status = ProgressStatus::from_counts(completed, total);
            let watched_secs = course
                .lectures()
                .filter(|l| enrollment.has_completed(&l.id))
                .map(|l| l.duration_seconds)
                .sum();

            match status {
                ProgressStatus::Completed => stats.completed_courses += 1,
                ProgressStatus::InProgress => stats.in_progress_courses += 1,
                ProgressStatus::NotStarted => stats.not_started_courses += 1,
            }
            stats.watched_secs += watched_secs;
            stats.courses.push(CourseProgress {
                course_id: course.id.clone(),
                title: course.title.clone(),
                completed_lectures: completed,
                total_lectures: total,
                percent,
                status,
                watched_secs,
                total_secs: total_duration_secs(course),
            });
        }

        stats
    }

    pub fn enrolled_courses(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_zero_total() {
        assert_eq!(percent_complete(0, 0), 0);
        assert_eq!(percent_complete(5, 0), 0);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_complete(3, 4), 75);
        assert_eq!(percent_complete(1, 3), 33);
        assert_eq!(percent_complete(2, 3), 67);
        assert_eq!(percent_complete(1, 8), 13);
        assert_eq!(percent_complete(1, 200), 1);
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(percent_complete(9, 4), 100);
    }

    #[test]
    fn test_status_from_counts() {
        assert_eq!(ProgressStatus::from_counts(0, 4), ProgressStatus::NotStarted);
        assert_eq!(ProgressStatus::from_counts(0, 0), ProgressStatus::NotStarted);
        assert_eq!(ProgressStatus::from_counts(1, 4), ProgressStatus::InProgress);
        // 99.5% rounds to 100 but one lecture is still open
        assert_eq!(percent_complete(199, 200), 100);
        assert_eq!(ProgressStatus::from_counts(199, 200), ProgressStatus::InProgress);
        assert_eq!(ProgressStatus::from_counts(4, 4), ProgressStatus::Completed);
    }
}
