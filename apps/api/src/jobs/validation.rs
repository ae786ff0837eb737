use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::FieldError;
use crate::models::job::JobType;

/// Raw job fields as submitted by the client. Every field is optional here so
/// a missing field surfaces as a named validation error rather than a
/// deserialization failure; `createdBy` is never accepted from the payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
}

/// A payload that passed every field rule; the only type the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub contact: String,
    pub requirements: String,
    pub responsibilities: String,
    pub job_type: JobType,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern is valid")
});

const RESPONSIBILITIES_DEFAULT: &str = "Not specified";

/// Validates the full payload, collecting every field error rather than
/// stopping at the first. Messages match the copy the client already shows.
pub fn validate_job(payload: &JobPayload) -> Result<ValidJob, Vec<FieldError>> {
    let mut errors = Vec::new();

    // Title is the only trimmed field.
    let title = required_text(
        &mut errors,
        "title",
        payload.title.as_deref().map(str::trim),
        "Please provide a job title",
        100,
        "Title cannot be more than 100 characters",
    );
    let description = required_text(
        &mut errors,
        "description",
        payload.description.as_deref(),
        "Please provide a job description",
        1000,
        "Description cannot be more than 1000 characters",
    );
    let company = required_text(
        &mut errors,
        "company",
        payload.company.as_deref(),
        "Please provide a company name",
        50,
        "Company name cannot be more than 50 characters",
    );
    let location = required_text(
        &mut errors,
        "location",
        payload.location.as_deref(),
        "Please provide a location",
        100,
        "Location cannot be more than 100 characters",
    );

    let salary = match payload.salary {
        None => {
            errors.push(FieldError::new("salary", "Please provide a salary"));
            None
        }
        Some(s) if s < 0.0 => {
            errors.push(FieldError::new("salary", "Salary cannot be negative"));
            None
        }
        Some(s) => Some(s),
    };

    let contact = match payload.contact.as_deref().filter(|s| !s.is_empty()) {
        None => {
            errors.push(FieldError::new(
                "contact",
                "Please provide contact information",
            ));
            None
        }
        Some(c) if !EMAIL_RE.is_match(c) => {
            errors.push(FieldError::new("contact", "Please provide a valid email"));
            None
        }
        Some(c) => Some(c.to_string()),
    };

    let requirements = required_text(
        &mut errors,
        "requirements",
        payload.requirements.as_deref(),
        "Please provide job requirements",
        500,
        "Requirements cannot be more than 500 characters",
    );

    let responsibilities = match payload.responsibilities.as_deref() {
        None => Some(RESPONSIBILITIES_DEFAULT.to_string()),
        Some(r) if r.chars().count() > 500 => {
            errors.push(FieldError::new(
                "responsibilities",
                "Responsibilities cannot be more than 500 characters",
            ));
            None
        }
        Some(r) => Some(r.to_string()),
    };

    let job_type = match payload.job_type.as_deref().filter(|s| !s.is_empty()) {
        None => {
            errors.push(FieldError::new("jobType", "Please provide job type"));
            None
        }
        Some(t) => match t.parse::<JobType>() {
            Ok(t) => Some(t),
            Err(()) => {
                errors.push(FieldError::new(
                    "jobType",
                    format!("`{t}` is not a valid job type"),
                ));
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All unwraps are guarded: no field is None unless an error was recorded.
    Ok(ValidJob {
        title: title.unwrap(),
        description: description.unwrap(),
        company: company.unwrap(),
        location: location.unwrap(),
        salary: salary.unwrap(),
        contact: contact.unwrap(),
        requirements: requirements.unwrap(),
        responsibilities: responsibilities.unwrap(),
        job_type: job_type.unwrap(),
    })
}

fn required_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
    missing_message: &'static str,
    max_chars: usize,
    too_long_message: &'static str,
) -> Option<String> {
    match value.filter(|s| !s.is_empty()) {
        None => {
            errors.push(FieldError::new(field, missing_message));
            None
        }
        Some(s) if s.chars().count() > max_chars => {
            errors.push(FieldError::new(field, too_long_message));
            None
        }
        Some(s) => Some(s.to_string()),
    }
}
