//! Shared test support: an in-memory store implementing both repository
//! traits, standing in for the PostgreSQL adapters.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};
use student_registry::model::{Course, NewCourse, Student, StudentInput};
use student_registry::{
    AppError, AppState, CourseRepository, CourseService, StudentRepository, StudentService,
};

#[derive(Clone)]
struct ScalarStudent {
    first_name: String,
    last_name: String,
    email: String,
}

#[derive(Default)]
struct Inner {
    students: BTreeMap<i64, ScalarStudent>,
    courses: BTreeMap<i64, Course>,
    enrollments: BTreeSet<(i64, i64)>,
    next_student_id: i64,
    next_course_id: i64,
}

impl Inner {
    fn assemble(&self, id: i64, scalar: &ScalarStudent) -> Student {
        let courses = self
            .enrollments
            .iter()
            .filter(|(student_id, _)| *student_id == id)
            .filter_map(|(_, course_id)| self.courses.get(course_id).cloned())
            .collect();
        Student {
            id,
            first_name: scalar.first_name.clone(),
            last_name: scalar.last_name.clone(),
            email: scalar.email.clone(),
            courses,
        }
    }
}

/// Both repositories over one mutex-guarded map set, so enrollments can join
/// students to courses the way the join table does.
#[derive(Default)]
pub struct InMemoryRegistry {
    inner: Mutex<Inner>,
}

#[async_trait]
impl StudentRepository for InMemoryRegistry {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .students
            .iter()
            .map(|(id, scalar)| inner.assemble(*id, scalar))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .students
            .get(&id)
            .map(|scalar| inner.assemble(id, scalar)))
    }

    async fn insert(&self, input: &StudentInput) -> Result<Student, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_student_id += 1;
        let id = inner.next_student_id;
        let scalar = ScalarStudent {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
        };
        inner.students.insert(id, scalar.clone());
        Ok(inner.assemble(id, &scalar))
    }

    async fn update(&self, id: i64, input: &StudentInput) -> Result<Option<Student>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.students.contains_key(&id) {
            return Ok(None);
        }
        let scalar = ScalarStudent {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
        };
        inner.students.insert(id, scalar.clone());
        Ok(Some(inner.assemble(id, &scalar)))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.students.remove(&id).is_none() {
            return Ok(false);
        }
        // Mirror the join table's ON DELETE CASCADE.
        inner.enrollments.retain(|(student_id, _)| *student_id != id);
        Ok(true)
    }

    async fn add_enrollment(&self, student_id: i64, course_id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.enrollments.insert((student_id, course_id));
        Ok(())
    }

    async fn remove_enrollment(&self, student_id: i64, course_id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.enrollments.remove(&(student_id, course_id));
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryRegistry {
    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.courses.get(&id).cloned())
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, AppError> {
        let mut inner = self.inner.lock().unwrap();
        // Mirror the unique constraint on course_code.
        if inner
            .courses
            .values()
            .any(|existing| existing.course_code == course.course_code)
        {
            return Err(AppError::Db(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint \"course_course_code_key\"".into(),
            )));
        }
        inner.next_course_id += 1;
        let created = Course {
            id: inner.next_course_id,
            name: course.name.clone(),
            course_code: course.course_code.clone(),
            professor: course.professor.clone(),
            description: course.description.clone(),
            credits: course.credits,
        };
        inner.courses.insert(created.id, created.clone());
        Ok(created)
    }
}

pub fn registry() -> Arc<InMemoryRegistry> {
    Arc::new(InMemoryRegistry::default())
}

pub fn student_service(registry: &Arc<InMemoryRegistry>) -> StudentService {
    StudentService::new(registry.clone(), registry.clone())
}

pub fn course_service(registry: &Arc<InMemoryRegistry>) -> CourseService {
    CourseService::new(registry.clone())
}

pub fn app_state(registry: &Arc<InMemoryRegistry>) -> AppState {
    AppState::new(student_service(registry), course_service(registry))
}

pub fn student_input(first_name: &str, last_name: &str, email: &str) -> StudentInput {
    StudentInput {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
    }
}

pub fn new_course(name: &str, course_code: &str) -> NewCourse {
    NewCourse {
        name: name.into(),
        course_code: course_code.into(),
        professor: "Dr. Ada Lovelace".into(),
        description: None,
        credits: 3,
    }
}
