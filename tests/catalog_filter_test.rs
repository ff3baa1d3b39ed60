use learnhub::catalog::filter::{CourseFilter, SortKey, filter_courses};
use learnhub::catalog::models::{Course, Level};
use serde_json::json;

fn catalog() -> Vec<Course> {
    serde_json::from_value(json!([
        {
            "id": "rust-101", "title": "Rust Fundamentals",
            "description": "Ownership and borrowing from scratch",
            "price": 49.99, "category": "Programming", "level": "beginner",
            "studentsCount": 1200, "rating": 4.8, "createdAt": "2025-03-01T00:00:00Z"
        },
        {
            "id": "async-rust", "title": "Async in Practice",
            "description": "Futures, tokio and RUST services",
            "price": 89.0, "category": "Programming", "level": "advanced",
            "studentsCount": 300, "rating": 4.9, "createdAt": "2026-01-15T00:00:00Z"
        },
        {
            "id": "watercolor", "title": "Watercolor Basics",
            "description": "Brushes, paper, pigment",
            "price": 19.0, "category": "Art", "level": "beginner",
            "studentsCount": 5000, "rating": 4.5, "createdAt": "2024-06-01T00:00:00Z"
        },
        {
            "id": "go-web", "title": "Go for the Web",
            "description": "HTTP servers in Go",
            "price": 49.99, "category": "programming", "level": "intermediate",
            "studentsCount": 1200, "rating": 4.5, "createdAt": "2025-09-01T00:00:00Z"
        }
    ]))
    .expect("valid catalog fixture")
}

fn ids(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_search_title_and_description() {
    let courses = catalog();
    let result = filter_courses(&courses, &CourseFilter::default().with_search("RuSt"));
    assert_eq!(ids(&result), vec!["rust-101", "async-rust"]);
}

#[test]
fn test_category_and_level_are_anded() {
    let courses = catalog();

    let programming = filter_courses(&courses, &CourseFilter::default().with_category("Programming"));
    assert_eq!(ids(&programming), vec!["rust-101", "async-rust"]);

    let lowercase = filter_courses(&courses, &CourseFilter::default().with_category("programming"));
    assert_eq!(ids(&lowercase), vec!["go-web"]);

    let filter = CourseFilter::default()
        .with_category("Programming")
        .with_level(Level::Beginner);
    assert_eq!(ids(&filter_courses(&courses, &filter)), vec!["rust-101"]);

    let filter = CourseFilter::default()
        .with_search("brush")
        .with_category("Programming");
    assert!(filter_courses(&courses, &filter).is_empty());
}

#[test]
fn test_sort_keys() {
    let courses = catalog();
    let sorted = |key| ids(&filter_courses(&courses, &CourseFilter::default().with_sort(key)));

    assert_eq!(
        sorted(SortKey::Newest),
        vec!["async-rust", "go-web", "rust-101", "watercolor"]
    );
    assert_eq!(
        sorted(SortKey::Oldest),
        vec!["watercolor", "rust-101", "go-web", "async-rust"]
    );
    // Ties keep input order
    assert_eq!(
        sorted(SortKey::PriceLow),
        vec!["watercolor", "rust-101", "go-web", "async-rust"]
    );
    assert_eq!(
        sorted(SortKey::PriceHigh),
        vec!["async-rust", "rust-101", "go-web", "watercolor"]
    );
    assert_eq!(
        sorted(SortKey::Popularity),
        vec!["watercolor", "rust-101", "go-web", "async-rust"]
    );
    assert_eq!(
        sorted(SortKey::Rating),
        vec!["async-rust", "rust-101", "watercolor", "go-web"]
    );
}

#[test]
fn test_result_is_subset_and_source_untouched() {
    let courses = catalog();
    let before = courses.clone();
    let filter = CourseFilter::default()
        .with_search("e")
        .with_sort(SortKey::PriceHigh);

    let result = filter_courses(&courses, &filter);

    for course in &result {
        assert!(courses.iter().any(|c| std::ptr::eq(c, *course)));
    }
    assert_eq!(courses, before);
}

#[test]
fn test_filtering_is_idempotent() {
    let courses = catalog();
    let filters = [
        CourseFilter::default(),
        CourseFilter::default().with_search("rust").with_sort(SortKey::Rating),
        CourseFilter::default().with_category("programming").with_sort(SortKey::PriceLow),
        CourseFilter::default().with_level(Level::Beginner).with_sort(SortKey::Popularity),
    ];

    for filter in &filters {
        let once: Vec<Course> = filter_courses(&courses, filter).into_iter().cloned().collect();
        let twice: Vec<Course> = filter_courses(&once, filter).into_iter().cloned().collect();
        assert_eq!(once, twice, "filter {:?}", filter);
    }
}
