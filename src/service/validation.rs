//! Explicit per-entity validation, invoked at the boundary before any
//! create/update reaches a service. Collects every violation into one map.

use crate::error::AppError;
use crate::model::{CourseInput, NewCourse, StudentInput};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const MAX_DESCRIPTION_CHARS: usize = 500;
const MIN_CREDITS: i32 = 1;

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

pub fn validate_student(input: &StudentInput) -> Result<(), AppError> {
    let mut errors = BTreeMap::new();
    if input.first_name.is_empty() {
        errors.insert("firstName".into(), "First name cannot be empty".into());
    }
    if input.last_name.is_empty() {
        errors.insert("lastName".into(), "Last name cannot be empty".into());
    }
    if input.email.is_empty() {
        errors.insert("email".into(), "Email cannot be empty".into());
    } else if !email_pattern().is_match(&input.email) {
        errors.insert("email".into(), "Email should be valid".into());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// On success the payload is narrowed to a `NewCourse` with its credits
/// guaranteed present.
pub fn validate_course(input: &CourseInput) -> Result<NewCourse, AppError> {
    let mut errors = BTreeMap::new();
    if input.name.is_empty() {
        errors.insert("name".into(), "Course name cannot be empty".into());
    }
    if input.course_code.is_empty() {
        errors.insert("courseCode".into(), "Course code cannot be empty".into());
    }
    if input.professor.is_empty() {
        errors.insert("professor".into(), "Professor name cannot be empty".into());
    }
    if let Some(description) = &input.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.insert(
                "description".into(),
                "Description cannot be longer than 500 characters".into(),
            );
        }
    }
    match input.credits {
        None => {
            errors.insert("credits".into(), "Credits cannot be null".into());
        }
        Some(credits) if credits < MIN_CREDITS => {
            errors.insert(
                "credits".into(),
                "Course must be worth at least 1 credit".into(),
            );
        }
        Some(_) => {}
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(NewCourse {
        name: input.name.clone(),
        course_code: input.course_code.clone(),
        professor: input.professor.clone(),
        description: input.description.clone(),
        credits: input.credits.unwrap_or(MIN_CREDITS),
    })
}
