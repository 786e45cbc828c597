//! Shared application state for the API routes.

use crate::service::{CourseService, StudentService};

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub courses: CourseService,
}

impl AppState {
    pub fn new(students: StudentService, courses: CourseService) -> Self {
        Self { students, courses }
    }
}
