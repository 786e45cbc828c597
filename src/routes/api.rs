//! REST routes for students and courses. Mounted under /api by the caller.

use crate::handlers::courses;
use crate::handlers::students::{self, delete as delete_student};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/:id",
            get(students::read)
                .put(students::update)
                .delete(delete_student),
        )
        .route("/students/:id/enroll/:course_id", post(students::enroll))
        .route(
            "/students/:id/unenroll/:course_id",
            delete(students::unenroll),
        )
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/:id", get(courses::read))
        .with_state(state)
}
