//! Entities and request payloads. Wire names are camelCase; column names snake_case.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub course_code: String,
    pub professor: String,
    pub description: Option<String>,
    pub credits: i32,
}

/// A student together with its current enrollments. The reverse
/// course-to-students view is never materialized; enrollment is keyed by
/// (student_id, course_id) pairs in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub courses: Vec<Course>,
}

/// Create/update payload for a student. Enrollments are managed through the
/// enroll/unenroll operations only, so any `courses` key in the payload is
/// dropped on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Create payload for a course, before validation. `credits` stays optional
/// here so a missing value can be reported as its own violation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub professor: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credits: Option<i32>,
}

/// A validated course payload, produced by `validate_course`.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub course_code: String,
    pub professor: String,
    pub description: Option<String>,
    pub credits: i32,
}
