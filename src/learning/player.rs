use crate::catalog::curriculum::{CurriculumEntry, curriculum};
use crate::catalog::models::{Course, Lecture};
use crate::learning::duration::format_clock;
use crate::learning::models::EnrollmentRecord;
use crate::learning::progress::percent_complete;

pub const PLAYBACK_RATES: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
pub const DEFAULT_COMPLETION_THRESHOLD: u8 = 90;

/// Lecture a student should land on when opening a course: the first one,
/// in curriculum order, not yet completed. Falls back to the first lecture
/// once everything is done.
pub fn resume_lecture<'a>(
    course: &'a Course,
    enrollment: Option<&EnrollmentRecord>,
) -> Option<&'a Lecture> {
    let first = course.lectures().next()?;
    let Some(record) = enrollment else {
        return Some(first);
    };
    course
        .lectures()
        .find(|l| !record.has_completed(&l.id))
        .or(Some(first))
}

/// Playback controls for one course.
///
/// Holds the lecture cursor and the position within the current lecture.
/// Completion is not written anywhere; callers poll
/// [`Player::should_mark_complete`] and report it to the backend.
#[derive(Debug)]
pub struct Player<'a> {
    entries: Vec<CurriculumEntry<'a>>,
    index: usize,
    position_secs: u64,
    rate_index: usize,
    completion_threshold: u8,
}

impl<'a> Player<'a> {
    /// `None` for a course without lectures.
    pub fn new(course: &'a Course) -> Option<Self> {
        let entries = curriculum(course);
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            index: 0,
            position_secs: 0,
            rate_index: 2,
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
        })
    }

    /// Open at the resume point for `enrollment`.
    pub fn resume(course: &'a Course, enrollment: Option<&EnrollmentRecord>) -> Option<Self> {
        let mut player = Self::new(course)?;
        if let Some(lecture) = resume_lecture(course, enrollment) {
            player.select(&lecture.id);
        }
        Some(player)
    }

    pub fn with_completion_threshold(mut self, percent: u8) -> Self {
        self.completion_threshold = percent.clamp(1, 100);
        self
    }

    pub fn current(&self) -> &CurriculumEntry<'a> {
        &self.entries[self.index]
    }

    pub fn lecture(&self) -> &'a Lecture {
        self.entries[self.index].lecture
    }

    /// Jump to a lecture by id. Returns false, leaving the player as it
    /// was, if the course has no such lecture.
    pub fn select(&mut self, lecture_id: &str) -> bool {
        match self.entries.iter().position(|e| e.lecture.id == lecture_id) {
            Some(i) => {
                self.index = i;
                self.position_secs = 0;
                true
            }
            None => false,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Advance to the next lecture; stays on the last one at the end.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        self.position_secs = 0;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        self.position_secs = 0;
        true
    }

    pub fn position_secs(&self) -> u64 {
        self.position_secs
    }

    pub fn seek_to(&mut self, secs: u64) {
        self.position_secs = secs.min(self.lecture().duration_seconds);
    }

    /// Relative seek, e.g. -10 / +10 skip buttons.
    pub fn seek_by(&mut self, delta_secs: i64) {
        let target = if delta_secs.is_negative() {
            self.position_secs.saturating_sub(delta_secs.unsigned_abs())
        } else {
            self.position_secs.saturating_add(delta_secs as u64)
        };
        self.seek_to(target);
    }

    pub fn playback_rate(&self) -> f32 {
        PLAYBACK_RATES[self.rate_index]
    }

    /// Step to the next playback rate, wrapping from the fastest back to
    /// the slowest.
    pub fn cycle_playback_rate(&mut self) -> f32 {
        self.rate_index = (self.rate_index + 1) % PLAYBACK_RATES.len();
        self.playback_rate()
    }

    pub fn watched_percent(&self) -> u8 {
        percent_complete(
            self.position_secs as usize,
            self.lecture().duration_seconds as usize,
        )
    }

    pub fn should_mark_complete(&self) -> bool {
        self.lecture().duration_seconds > 0 && self.watched_percent() >= self.completion_threshold
    }

    pub fn completion_threshold(&self) -> u8 {
        self.completion_threshold
    }

    /// Earliest position in the current lecture at which
    /// [`Player::should_mark_complete`] turns true. `None` for a lecture
    /// without a known length.
    pub fn completion_point_secs(&self) -> Option<u64> {
        let duration = self.lecture().duration_seconds;
        if duration == 0 {
            return None;
        }
        // Inverse of the half-up rounding in `percent_complete`.
        let doubled = 2 * u64::from(self.completion_threshold) - 1;
        Some((duration * doubled).div_ceil(200))
    }

    /// "05:23 / 25:00"
    pub fn time_display(&self) -> String {
        format!(
            "{} / {}",
            format_clock(self.position_secs),
            format_clock(self.lecture().duration_seconds)
        )
    }
}
