use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The five posting types the board accepts. Stored as TEXT (the hyphenated
/// names below), which is also how they travel over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }
}

impl FromStr for JobType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting as persisted. Serializes with the field names the client
/// consumes: camelCase keys and `_id` for the identifier.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub contact: String,
    pub requirements: String,
    pub responsibilities: String,
    pub job_type: String,
    pub created_by: Uuid,
    pub posted_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat row from the list query: jobs joined with the creator's name.
#[derive(Debug, Clone, FromRow)]
pub struct JobCreatorRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub contact: String,
    pub requirements: String,
    pub responsibilities: String,
    pub job_type: String,
    pub created_by: Uuid,
    pub creator_name: String,
    pub posted_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `createdBy` populated as an object on list responses.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

/// List-response shape: a job with `createdBy` expanded to `{_id, name}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWithCreator {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub contact: String,
    pub requirements: String,
    pub responsibilities: String,
    pub job_type: String,
    pub created_by: CreatorRef,
    pub posted_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobCreatorRow> for JobWithCreator {
    fn from(row: JobCreatorRow) -> Self {
        JobWithCreator {
            id: row.id,
            title: row.title,
            description: row.description,
            company: row.company,
            location: row.location,
            salary: row.salary,
            contact: row.contact,
            requirements: row.requirements,
            responsibilities: row.responsibilities,
            job_type: row.job_type,
            created_by: CreatorRef {
                id: row.created_by,
                name: row.creator_name,
            },
            posted_date: row.posted_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> JobRow {
        JobRow {
            id: Uuid::nil(),
            title: "Backend Engineer".into(),
            description: "Build APIs".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            salary: 90000.0,
            contact: "hr@acme.com".into(),
            requirements: "3+ yrs Node".into(),
            responsibilities: "Not specified".into(),
            job_type: "Full-time".into(),
            created_by: Uuid::nil(),
            posted_date: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_job_type_round_trips_hyphenated_names() {
        for t in JobType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            let back: JobType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, t);
            assert_eq!(t.as_str().parse::<JobType>().unwrap(), t);
        }
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            r#""Full-time""#
        );
        assert!("full-time".parse::<JobType>().is_err());
    }

    #[test]
    fn test_job_row_serializes_with_client_field_names() {
        let value = serde_json::to_value(sample_row()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "_id",
            "title",
            "salary",
            "jobType",
            "createdBy",
            "postedDate",
            "createdAt",
            "updatedAt",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("job_type"));
    }

    #[test]
    fn test_list_shape_expands_creator() {
        let row = JobCreatorRow {
            id: Uuid::nil(),
            title: "Backend Engineer".into(),
            description: "Build APIs".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            salary: 90000.0,
            contact: "hr@acme.com".into(),
            requirements: "3+ yrs Node".into(),
            responsibilities: "Not specified".into(),
            job_type: "Full-time".into(),
            created_by: Uuid::nil(),
            creator_name: "Jordan".into(),
            posted_date: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(JobWithCreator::from(row)).unwrap();
        assert_eq!(value["createdBy"]["name"], "Jordan");
        assert!(value["createdBy"]["_id"].is_string());
    }
}
