//! Data access: thin repository traits and their PostgreSQL implementations.

mod postgres;

use crate::error::AppError;
use crate::model::{Course, NewCourse, Student, StudentInput};
use async_trait::async_trait;

pub use postgres::{PgCourseRepository, PgStudentRepository};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;
    async fn insert(&self, input: &StudentInput) -> Result<Student, AppError>;
    /// Overwrites the scalar fields only. Returns None when no row matched.
    async fn update(&self, id: i64, input: &StudentInput) -> Result<Option<Student>, AppError>;
    /// Returns whether a row was removed. Join rows go with it.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
    /// Idempotent: adding an existing (student, course) pair is a no-op.
    async fn add_enrollment(&self, student_id: i64, course_id: i64) -> Result<(), AppError>;
    /// Idempotent: removing an absent pair is a no-op.
    async fn remove_enrollment(&self, student_id: i64, course_id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Course>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;
    async fn insert(&self, course: &NewCourse) -> Result<Course, AppError>;
}
