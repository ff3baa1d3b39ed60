use crate::catalog::models::{Course, Level};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering applied to a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    Popularity,
    Rating,
}

/// Criteria for a catalog listing. Every field is optional; active
/// predicates are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub sort: Option<SortKey>,
}

impl CourseFilter {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Search needle, lowercased but otherwise literal; `None` when blank.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_lowercase)
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }

    fn matches_with(&self, course: &Course, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let in_title = course.title.to_lowercase().contains(needle);
            let in_description = course.description.to_lowercase().contains(needle);
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(category) = self.category_filter() {
            if course.category != category {
                return false;
            }
        }

        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }

        true
    }
}

/// Filter and sort a course collection.
///
/// Returns references into `courses`, so the result is always a subset of
/// the input and the input is never reordered. Sorting is stable: courses
/// that compare equal keep their relative input order, which makes the
/// operation idempotent.
pub fn filter_courses<'a>(courses: &'a [Course], filter: &CourseFilter) -> Vec<&'a Course> {
    let needle = filter.needle();
    let mut result: Vec<&Course> = courses
        .iter()
        .filter(|c| filter.matches_with(c, needle.as_deref()))
        .collect();

    if let Some(key) = filter.sort {
        result.sort_by(|a, b| compare(key, a, b));
    }

    tracing::debug!(
        total = courses.len(),
        matched = result.len(),
        "filtered course listing"
    );
    result
}

fn compare(key: SortKey, a: &Course, b: &Course) -> Ordering {
    match key {
        // Courses without a creation date sort last for both directions.
        SortKey::Newest => match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Oldest => match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::PriceLow => a.price.total_cmp(&b.price),
        SortKey::PriceHigh => b.price.total_cmp(&a.price),
        SortKey::Popularity => b.students_count.cmp(&a.students_count),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
    }
}
