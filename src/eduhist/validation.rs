//! Candidate entry validation.
//!
//! Rules:
//! - institution: required, at most 256 characters
//! - specialty: required, at most 256 characters, Latin or Cyrillic letters,
//!   digits and whitespace only (no punctuation)
//! - start year: required, between 1980 and ten years from now
//! - end year: optional (absent means "ongoing"), same range when present
//! - when both years are present: the end year may not precede the start
//!   year, the duration may not exceed 11 years, and must be at least 1 year
//!
//! All independent field failures are collected in one pass; a field keeps
//! only the first message that applied to it.

use crate::model::{EntryDraft, NewEntry};
use chrono::{Datelike, Utc};
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_YEAR: i32 = 1980;
pub const MAX_DURATION_YEARS: i32 = 11;
pub const MAX_FIELD_CHARS: usize = 256;

const REQUIRED: &str = "field is required";

/// Latest acceptable year: ten years past the current one.
pub fn max_year() -> i32 {
    Utc::now().year() + 10
}

/// The closed set of validated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Institution,
    Specialty,
    StartYear,
    EndYear,
    StudyForm,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Institution => "institution",
            Field::Specialty => "specialty",
            Field::StartYear => "start year",
            Field::EndYear => "end year",
            Field::StudyForm => "study form",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field error messages for a rejected candidate. At most one message
/// per field: the first rule that failed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn is_specialty_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch.is_whitespace()
        || ('а'..='я').contains(&ch)
        || ('А'..='Я').contains(&ch)
}

fn check_year_range(year: i32, max: i32) -> Option<String> {
    if year < MIN_YEAR || year > max {
        Some(format!("year must be between {} and {}", MIN_YEAR, max))
    } else {
        None
    }
}

/// Validate a candidate entry. On success returns the normalized entry,
/// ready for identity assignment by the store. No side effects.
pub fn validate(draft: &EntryDraft) -> Result<NewEntry, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let max = max_year();

    if draft.institution.is_empty() {
        errors.add(Field::Institution, REQUIRED);
    } else if draft.institution.chars().count() > MAX_FIELD_CHARS {
        errors.add(
            Field::Institution,
            format!("must be at most {} characters", MAX_FIELD_CHARS),
        );
    }

    if draft.specialty.is_empty() {
        errors.add(Field::Specialty, REQUIRED);
    } else if draft.specialty.chars().count() > MAX_FIELD_CHARS {
        errors.add(
            Field::Specialty,
            format!("must be at most {} characters", MAX_FIELD_CHARS),
        );
    } else if !draft.specialty.chars().all(is_specialty_char) {
        errors.add(Field::Specialty, "only letters and digits are allowed");
    }

    match draft.start_year {
        None => errors.add(Field::StartYear, REQUIRED),
        Some(year) => {
            if let Some(message) = check_year_range(year, max) {
                errors.add(Field::StartYear, message);
            }
        }
    }

    if let Some(year) = draft.end_year {
        if let Some(message) = check_year_range(year, max) {
            errors.add(Field::EndYear, message);
        }
    }

    if draft.study_form.is_none() {
        errors.add(Field::StudyForm, REQUIRED);
    }

    // Cross-field rules apply only when both years are present and passed
    // their structural checks. Evaluation order matters: a field keeps the
    // first violated rule only.
    if let (Some(start), Some(end)) = (draft.start_year, draft.end_year) {
        if errors.get(Field::StartYear).is_none() && errors.get(Field::EndYear).is_none() {
            if end < start {
                errors.add(Field::EndYear, "end year cannot precede start year");
            } else if end - start > MAX_DURATION_YEARS {
                errors.add(
                    Field::EndYear,
                    format!("duration exceeds {} years", MAX_DURATION_YEARS),
                );
            } else if end - start < 1 {
                errors.add(Field::EndYear, "minimum duration is 1 year");
            }
        }
    }

    match (draft.start_year, draft.study_form) {
        (Some(start_year), Some(study_form)) if errors.is_empty() => Ok(NewEntry {
            institution: draft.institution.clone(),
            specialty: draft.specialty.clone(),
            start_year,
            end_year: draft.end_year,
            study_form,
            documents: draft.documents.clone(),
        }),
        _ => Err(errors),
    }
}
