//! Student operations: CRUD plus enroll/unenroll.

use crate::error::AppError;
use crate::model::{Student, StudentInput};
use crate::repository::{CourseRepository, StudentRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentService {
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl StudentService {
    pub fn new(students: Arc<dyn StudentRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { students, courses }
    }

    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        self.students.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Student, AppError> {
        self.students
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::student_not_found(id))
    }

    /// Input is validated at the boundary before this is called.
    pub async fn create(&self, input: &StudentInput) -> Result<Student, AppError> {
        let student = self.students.insert(input).await?;
        tracing::info!(id = student.id, "created student");
        Ok(student)
    }

    /// Overwrites first name, last name, and email only. Enrollments are
    /// untouched regardless of the payload.
    pub async fn update(&self, id: i64, input: &StudentInput) -> Result<Student, AppError> {
        self.students
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::student_not_found(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.students.delete(id).await? {
            return Err(AppError::student_not_found(id));
        }
        tracing::info!(id, "deleted student");
        Ok(())
    }

    /// Student is checked before the course, so a missing student wins when
    /// both ids are absent. Enrolling twice is a no-op.
    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<Student, AppError> {
        self.get(student_id).await?;
        self.require_course(course_id).await?;
        self.students.add_enrollment(student_id, course_id).await?;
        self.get(student_id).await
    }

    /// Symmetric to `enroll`; removing an absent enrollment is a no-op.
    pub async fn unenroll(&self, student_id: i64, course_id: i64) -> Result<Student, AppError> {
        self.get(student_id).await?;
        self.require_course(course_id).await?;
        self.students
            .remove_enrollment(student_id, course_id)
            .await?;
        self.get(student_id).await
    }

    async fn require_course(&self, course_id: i64) -> Result<(), AppError> {
        self.courses
            .find_by_id(course_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::course_not_found(course_id))
    }
}
