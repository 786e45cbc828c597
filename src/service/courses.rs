//! Course operations: list, create, get.

use crate::error::AppError;
use crate::model::{Course, NewCourse};
use crate::repository::CourseRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        self.courses.find_all().await
    }

    /// A duplicate course code trips the store's unique constraint and
    /// surfaces as a store error, not a domain one.
    pub async fn create(&self, course: &NewCourse) -> Result<Course, AppError> {
        let created = self.courses.insert(course).await?;
        tracing::info!(id = created.id, code = %created.course_code, "created course");
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<Course, AppError> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::course_not_found(id))
    }
}
