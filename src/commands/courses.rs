use crate::OutputFormat;
use crate::catalog::curriculum::{render_tree, total_duration_secs};
use crate::catalog::filter::{CourseFilter, filter_courses};
use crate::commands::{client, money, truncate};
use crate::config::Config;
use crate::learning::duration::format_duration;
use anyhow::{Context, Result};

pub fn list(config: &Config, mut filter: CourseFilter, format: OutputFormat) -> Result<()> {
    if filter.sort.is_none() {
        filter.sort = config.catalog.default_sort;
    }

    let client = client(config)?;
    let courses = client.list_courses().context("Failed to fetch courses")?;
    let matched = filter_courses(&courses, &filter);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("No courses found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<40} {:<16} {:<13} {:>9} {:>7} {:>8}",
        "ID", "Title", "Category", "Level", "Price", "Rating", "Length"
    );
    println!("{}", "-".repeat(111));

    for course in &matched {
        println!(
            "{:<12} {:<40} {:<16} {:<13} {:>9} {:>7.1} {:>8}",
            truncate(&course.id, 12),
            truncate(&course.title, 40),
            truncate(&course.category, 16),
            course.level.to_string(),
            money(course.price),
            course.rating,
            format_duration(Some(total_duration_secs(course)))
        );
    }
    println!("\n{} of {} courses", matched.len(), courses.len());

    Ok(())
}

pub fn show(config: &Config, id: &str, format: OutputFormat) -> Result<()> {
    let client = client(config)?;
    let course = client.get_course(id)?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&course)?);
        return Ok(());
    }

    println!("{}", course.title);
    if let Some(instructor) = &course.instructor {
        println!("Instructor: {}", instructor);
    }
    println!("Category: {} | Level: {}", course.category, course.level);
    match course.discounted_from() {
        Some(original) => println!("Price: {} (was {})", money(course.price), money(original)),
        None => println!("Price: {}", money(course.price)),
    }
    println!(
        "Rating: {:.1} | Students: {}",
        course.rating, course.students_count
    );
    if !course.description.is_empty() {
        println!("\n{}", course.description);
    }

    println!("\nCurriculum:");
    println!("{}", render_tree(&course, None));

    Ok(())
}
