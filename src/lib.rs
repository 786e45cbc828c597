//! Student registry: REST backend for students, courses, and enrollments.

pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use repository::{CourseRepository, PgCourseRepository, PgStudentRepository, StudentRepository};
pub use routes::{api_routes, common_routes, common_routes_with_ready};
pub use seed::seed_demo_data;
pub use service::{validate_course, validate_student, CourseService, StudentService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
