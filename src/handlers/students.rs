//! Student endpoints: CRUD plus enrollment management.

use crate::error::AppError;
use crate::model::{Student, StudentInput};
use crate::service::validate_student;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.students.list().await?))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    validate_student(&input)?;
    let student = state.students.create(&input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, AppError> {
    validate_student(&input)?;
    Ok(Json(state.students.update(id, &input).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.students.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn enroll(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(i64, i64)>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.enroll(id, course_id).await?))
}

pub async fn unenroll(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(i64, i64)>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.unenroll(id, course_id).await?))
}
