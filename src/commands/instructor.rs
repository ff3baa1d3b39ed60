use crate::OutputFormat;
use crate::catalog::instructor::InstructorSummary;
use crate::commands::{client, money, truncate};
use crate::config::Config;
use anyhow::{Context, Result};

pub fn summary(config: &Config, format: OutputFormat) -> Result<()> {
    let client = client(config)?;
    let courses = client
        .instructor_courses()
        .context("Failed to fetch instructor courses")?;
    let summary = InstructorSummary::compute(&courses);

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Courses: {} | Students: {} | Estimated revenue: {}",
        summary.course_count,
        summary.total_students,
        money(summary.estimated_revenue)
    );
    match summary.average_rating {
        Some(r) => println!("Average rating: {:.1}", r),
        None => println!("Average rating: (no ratings yet)"),
    }

    if !courses.is_empty() {
        println!();
        println!("{:<12} {:<44} {:>9} {:>10}", "ID", "Title", "Students", "Price");
        println!("{}", "-".repeat(78));
        for course in &courses {
            println!(
                "{:<12} {:<44} {:>9} {:>10}",
                truncate(&course.id, 12),
                truncate(&course.title, 44),
                course.students_count,
                money(course.price)
            );
        }
    }

    Ok(())
}
