//! sqlx-backed repositories. Mutations run inside an explicit transaction;
//! an early error return rolls back on drop.

use crate::error::AppError;
use crate::model::{Course, NewCourse, Student, StudentInput};
use crate::repository::{CourseRepository, StudentRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool};
use std::collections::HashMap;

#[derive(FromRow)]
struct StudentRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl StudentRow {
    fn into_student(self, courses: Vec<Course>) -> Student {
        Student {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            courses,
        }
    }
}

#[derive(FromRow)]
struct EnrollmentRow {
    student_id: i64,
    #[sqlx(flatten)]
    course: Course,
}

#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn courses_for_student<'e, E: PgExecutor<'e>>(
    executor: E,
    student_id: i64,
) -> Result<Vec<Course>, AppError> {
    let courses = sqlx::query_as::<_, Course>(
        "SELECT c.id, c.name, c.course_code, c.professor, c.description, c.credits \
         FROM student_courses sc JOIN course c ON c.id = sc.course_id \
         WHERE sc.student_id = $1 ORDER BY c.id",
    )
    .bind(student_id)
    .fetch_all(executor)
    .await?;
    Ok(courses)
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let rows: Vec<StudentRow> =
            sqlx::query_as("SELECT id, first_name, last_name, email FROM student ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        // One pass over the join table instead of a query per student.
        let enrollments: Vec<EnrollmentRow> = sqlx::query_as(
            "SELECT sc.student_id, c.id, c.name, c.course_code, c.professor, c.description, c.credits \
             FROM student_courses sc JOIN course c ON c.id = sc.course_id ORDER BY c.id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_student: HashMap<i64, Vec<Course>> = HashMap::new();
        for e in enrollments {
            by_student.entry(e.student_id).or_default().push(e.course);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let courses = by_student.remove(&row.id).unwrap_or_default();
                row.into_student(courses)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row: Option<StudentRow> =
            sqlx::query_as("SELECT id, first_name, last_name, email FROM student WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        match row {
            None => Ok(None),
            Some(row) => {
                let courses = courses_for_student(&self.pool, id).await?;
                Ok(Some(row.into_student(courses)))
            }
        }
    }

    async fn insert(&self, input: &StudentInput) -> Result<Student, AppError> {
        let mut tx = self.pool.begin().await?;
        let row: StudentRow = sqlx::query_as(
            "INSERT INTO student (first_name, last_name, email) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, email",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(id = row.id, "inserted student");
        Ok(row.into_student(Vec::new()))
    }

    async fn update(&self, id: i64, input: &StudentInput) -> Result<Option<Student>, AppError> {
        let mut tx = self.pool.begin().await?;
        let row: Option<StudentRow> = sqlx::query_as(
            "UPDATE student SET first_name = $2, last_name = $3, email = $4 WHERE id = $1 \
             RETURNING id, first_name, last_name, email",
        )
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let courses = courses_for_student(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(Some(row.into_student(courses)))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_enrollment(&self, student_id: i64, course_id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO student_courses (student_id, course_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn remove_enrollment(&self, student_id: i64, course_id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM student_courses WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, course_code, professor, description, credits FROM course ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, name, course_code, professor, description, credits FROM course WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, AppError> {
        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Course>(
            "INSERT INTO course (name, course_code, professor, description, credits) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, course_code, professor, description, credits",
        )
        .bind(&course.name)
        .bind(&course.course_code)
        .bind(&course.professor)
        .bind(&course.description)
        .bind(course.credits)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(id = created.id, code = %created.course_code, "inserted course");
        Ok(created)
    }
}
