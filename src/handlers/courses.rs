//! Course endpoints: list, create, read.

use crate::error::AppError;
use crate::model::{Course, CourseInput};
use crate::service::validate_course;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.courses.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CourseInput>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let new_course = validate_course(&input)?;
    let course = state.courses.create(&new_course).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    Ok(Json(state.courses.get(id).await?))
}
