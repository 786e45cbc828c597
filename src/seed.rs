//! Demo data bootstrap: a handful of courses and students for a fresh store.

use crate::error::AppError;
use crate::model::{NewCourse, StudentInput};
use crate::repository::{CourseRepository, StudentRepository};

/// Insert the demo rows unless the store already holds data. Guarded so a
/// restart does not trip the course_code uniqueness constraint.
pub async fn seed_demo_data(
    students: &dyn StudentRepository,
    courses: &dyn CourseRepository,
) -> Result<(), AppError> {
    if !courses.find_all().await?.is_empty() || !students.find_all().await?.is_empty() {
        tracing::debug!("store already populated, skipping demo seed");
        return Ok(());
    }

    let demo_courses = [
        NewCourse {
            name: "Introduction to Programming".into(),
            course_code: "CS101".into(),
            professor: "Dr. Ada Lovelace".into(),
            description: Some("Learn the fundamentals of programming using Java.".into()),
            credits: 3,
        },
        NewCourse {
            name: "Calculus I".into(),
            course_code: "MATH201".into(),
            professor: "Dr. Isaac Newton".into(),
            description: Some("An introduction to differential calculus.".into()),
            credits: 4,
        },
        NewCourse {
            name: "World History".into(),
            course_code: "HIST101".into(),
            professor: "Dr. Herodotus".into(),
            description: Some("A survey of major global events and civilizations.".into()),
            credits: 3,
        },
    ];
    for course in &demo_courses {
        courses.insert(course).await?;
    }

    let demo_students = [
        ("Alice", "Johnson", "alice.j@example.com"),
        ("Bob", "Smith", "bob.s@example.com"),
        ("Charlie", "Brown", "charlie.b@example.com"),
    ];
    for (first_name, last_name, email) in demo_students {
        students
            .insert(&StudentInput {
                first_name: first_name.into(),
                last_name: last_name.into(),
                email: email.into(),
            })
            .await?;
    }

    tracing::info!(
        courses = demo_courses.len(),
        students = demo_students.len(),
        "seeded demo data"
    );
    Ok(())
}
