use crate::catalog::models::{Course, Lecture, Section};
use crate::learning::duration::format_duration;
use crate::learning::models::{EnrollmentRecord, lecture_completed};
use termtree::Tree;

/// A lecture together with its position in the course.
#[derive(Debug, Clone, Copy)]
pub struct CurriculumEntry<'a> {
    /// 1-based, counted across sections.
    pub number: usize,
    pub section_index: usize,
    pub section: &'a Section,
    pub lecture: &'a Lecture,
}

pub fn curriculum(course: &Course) -> Vec<CurriculumEntry<'_>> {
    course
        .sections
        .iter()
        .enumerate()
        .flat_map(|(section_index, section)| {
            section
                .lectures
                .iter()
                .map(move |lecture| (section_index, section, lecture))
        })
        .enumerate()
        .map(|(i, (section_index, section, lecture))| CurriculumEntry {
            number: i + 1,
            section_index,
            section,
            lecture,
        })
        .collect()
}

/// Sum of lecture durations. Falls back to the course-level duration when
/// the lectures carry none (listing payloads often omit them).
pub fn total_duration_secs(course: &Course) -> u64 {
    let from_lectures: u64 = course.lectures().map(|l| l.duration_seconds).sum();
    if from_lectures > 0 {
        from_lectures
    } else {
        course.duration_seconds.unwrap_or(0)
    }
}

pub fn section_duration_secs(section: &Section) -> u64 {
    section.lectures.iter().map(|l| l.duration_seconds).sum()
}

pub fn render_tree(course: &Course, enrollment: Option<&EnrollmentRecord>) -> Tree<String> {
    let root = format!(
        "{} ({} lectures, {})",
        course.title,
        course.lecture_count(),
        format_duration(Some(total_duration_secs(course)))
    );
    let mut tree = Tree::new(root);

    let mut number = 0;
    for section in &course.sections {
        let mut node = Tree::new(format!(
            "{} ({})",
            section.title,
            format_duration(Some(section_duration_secs(section)))
        ));
        for lecture in &section.lectures {
            number += 1;
            let mark = if lecture_completed(lecture, enrollment) {
                "[x]"
            } else {
                "[ ]"
            };
            node.push(Tree::new(format!(
                "{} {}. {} ({})",
                mark,
                number,
                lecture.title,
                format_duration(Some(lecture.duration_seconds))
            )));
        }
        tree.push(node);
    }

    tree
}
