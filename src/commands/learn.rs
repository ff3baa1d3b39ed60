use crate::OutputFormat;
use crate::api::LearnHubClient;
use crate::catalog::curriculum::render_tree;
use crate::catalog::models::Course;
use crate::commands::{client, truncate};
use crate::config::Config;
use crate::learning::duration::{format_clock, format_duration};
use crate::learning::models::EnrollmentRecord;
use crate::learning::player::Player;
use crate::learning::progress::{DashboardStats, course_progress, is_course_completed};
use anyhow::{Context, Result};

fn enrollment_for(client: &LearnHubClient, course_id: &str) -> Result<Option<EnrollmentRecord>> {
    let enrollments = client
        .list_enrollments()
        .context("Failed to fetch enrollments")?;
    Ok(enrollments.into_iter().find(|e| e.course_id == course_id))
}

pub fn dashboard(config: &Config, format: OutputFormat) -> Result<()> {
    let client = client(config)?;
    let enrollments = client
        .list_enrollments()
        .context("Failed to fetch enrollments")?;

    // Listing payloads omit the curriculum, so fetch each course in full.
    let courses = enrollments
        .iter()
        .map(|e| {
            client
                .get_course(&e.course_id)
                .with_context(|| format!("Failed to fetch course {}", e.course_id))
        })
        .collect::<Result<Vec<Course>>>()?;

    let stats = DashboardStats::compute(&courses, &enrollments);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.courses.is_empty() {
        println!("You are not enrolled in any courses yet.");
        return Ok(());
    }

    println!(
        "Enrolled: {} | Completed: {} | In progress: {} | Not started: {}",
        stats.enrolled_courses(),
        stats.completed_courses,
        stats.in_progress_courses,
        stats.not_started_courses
    );
    println!("Time watched: {}\n", format_duration(Some(stats.watched_secs)));

    println!(
        "{:<12} {:<40} {:>9} {:>6} {:>10}",
        "ID", "Course", "Lectures", "Done", "Watched"
    );
    println!("{}", "-".repeat(81));
    for row in &stats.courses {
        println!(
            "{:<12} {:<40} {:>9} {:>5}% {:>10}",
            truncate(&row.course_id, 12),
            truncate(&row.title, 40),
            format!("{}/{}", row.completed_lectures, row.total_lectures),
            row.percent,
            format_duration(Some(row.watched_secs))
        );
    }

    Ok(())
}

pub fn resume(config: &Config, course_id: &str) -> Result<()> {
    let client = client(config)?;
    let course = client.get_course(course_id)?;
    let enrollment = enrollment_for(&client, course_id)?;

    let player = Player::resume(&course, enrollment.as_ref())
        .context("Course has no lectures yet")?
        .with_completion_threshold(config.player.completion_threshold_percent);
    let entry = player.current();

    println!("{}", course.title);
    println!(
        "Up next: Lecture {} \"{}\" ({})",
        entry.number, entry.lecture.title, entry.section.title
    );
    println!("{}", player.time_display());
    if let Some(point) = player.completion_point_secs() {
        println!(
            "Completes at {} ({}%)",
            format_clock(point),
            player.completion_threshold()
        );
    }
    if let Some(url) = &entry.lecture.video_url {
        println!("Video: {}", url);
    }
    if let Some(record) = &enrollment {
        println!("Progress: {}%", course_progress(&course, record));
    }

    Ok(())
}

pub fn complete(
    config: &Config,
    course_id: &str,
    lecture_id: &str,
    watched_seconds: Option<u64>,
) -> Result<()> {
    let client = client(config)?;
    let course = client.get_course(course_id)?;
    let lecture = course
        .lecture(lecture_id)
        .with_context(|| format!("Lecture {} is not part of course {}", lecture_id, course_id))?;

    if let Some(watched) = watched_seconds {
        if let Some(mut player) = Player::new(&course) {
            player = player.with_completion_threshold(config.player.completion_threshold_percent);
            player.select(lecture_id);
            player.seek_to(watched);
            if player.completion_point_secs().is_some() && !player.should_mark_complete() {
                tracing::warn!(
                    lecture_id,
                    watched = player.watched_percent(),
                    threshold = player.completion_threshold(),
                    "completing a lecture below the watch threshold"
                );
                println!(
                    "Note: only {}% watched (threshold {}%).",
                    player.watched_percent(),
                    player.completion_threshold()
                );
            }
        }
    }

    let record = client
        .complete_lecture(course_id, lecture_id, watched_seconds)
        .context("Failed to mark lecture complete")?;

    println!("✓ Completed \"{}\"", lecture.title);
    println!("Progress: {}%", course_progress(&course, &record));
    if is_course_completed(&course, &record) {
        println!("🎉 Course complete: {}", course.title);
    }

    Ok(())
}

pub fn curriculum(config: &Config, course_id: &str) -> Result<()> {
    let client = client(config)?;
    let course = client.get_course(course_id)?;
    let enrollment = enrollment_for(&client, course_id)?;

    println!("{}", render_tree(&course, enrollment.as_ref()));
    Ok(())
}
