use crate::catalog::models::Course;
use serde::Serialize;

/// Aggregate numbers shown on the instructor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorSummary {
    pub course_count: usize,
    pub total_students: u64,
    /// Current price times enrolled students, summed. An estimate: the
    /// backend does not report what each student actually paid.
    pub estimated_revenue: f64,
    /// Mean over courses with a non-zero rating; `None` if none are rated.
    pub average_rating: Option<f64>,
}

impl InstructorSummary {
    pub fn compute(courses: &[Course]) -> Self {
        let total_students = courses.iter().map(|c| c.students_count).sum();
        let revenue: f64 = courses
            .iter()
            .map(|c| c.price.max(0.0) * c.students_count as f64)
            .sum();

        let rated: Vec<f64> = courses
            .iter()
            .map(|c| c.rating)
            .filter(|r| *r > 0.0)
            .collect();
        let average_rating = if rated.is_empty() {
            None
        } else {
            let mean = rated.iter().sum::<f64>() / rated.len() as f64;
            Some((mean * 10.0).round() / 10.0)
        };

        Self {
            course_count: courses.len(),
            total_students,
            estimated_revenue: (revenue * 100.0).round() / 100.0,
            average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Level;

    fn course(price: f64, students: u64, rating: f64) -> Course {
        Course {
            id: "c".to_string(),
            title: "t".to_string(),
            description: String::new(),
            instructor: Some("Ada".to_string()),
            price,
            original_price: None,
            category: String::new(),
            level: Level::AllLevels,
            duration_seconds: None,
            students_count: students,
            rating,
            created_at: None,
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_summary_over_courses() {
        let summary = InstructorSummary::compute(&[
            course(10.0, 3, 4.0),
            course(19.99, 1, 5.0),
            course(0.0, 100, 0.0),
        ]);

        assert_eq!(summary.course_count, 3);
        assert_eq!(summary.total_students, 104);
        assert_eq!(summary.estimated_revenue, 49.99);
        assert_eq!(summary.average_rating, Some(4.5));
    }

    #[test]
    fn test_summary_empty() {
        let summary = InstructorSummary::compute(&[]);
        assert_eq!(summary.course_count, 0);
        assert_eq!(summary.estimated_revenue, 0.0);
        assert_eq!(summary.average_rating, None);
    }
}
