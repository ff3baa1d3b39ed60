use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level advertised on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
    #[default]
    #[serde(alias = "All Levels", alias = "all", alias = "all_levels")]
    AllLevels,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::AllLevels => "All Levels",
        };
        f.write_str(label)
    }
}

/// A single video lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "duration")]
    pub duration_seconds: u64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// An ordered group of lectures within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

/// Course as served by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default, alias = "duration")]
    pub duration_seconds: Option<u64>,
    #[serde(default, alias = "enrolledStudents")]
    pub students_count: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// Lectures in curriculum order (section by section).
    pub fn lectures(&self) -> impl Iterator<Item = &Lecture> {
        self.sections.iter().flat_map(|s| s.lectures.iter())
    }

    pub fn lecture_count(&self) -> usize {
        self.sections.iter().map(|s| s.lectures.len()).sum()
    }

    pub fn lecture(&self, lecture_id: &str) -> Option<&Lecture> {
        self.lectures().find(|l| l.id == lecture_id)
    }

    /// Price before discount, when the catalog advertises one above the
    /// current price.
    pub fn discounted_from(&self) -> Option<f64> {
        self.original_price.filter(|orig| *orig > self.price)
    }
}
