use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::JobType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobListing {
    pub id: Uuid,
    pub job_title: String,
    pub job_description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<i64>,
    pub job_type: JobType,
    pub application_deadline: Option<NaiveDate>,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub tools_and_technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListingCreate {
    pub job_title: String,
    pub job_description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: Option<i64>,
    pub job_type: JobType,
    #[serde(default)]
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub tools_and_technologies: Vec<String>,
}

impl JobListingCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.job_title.trim().is_empty() {
            return Err("Job title is required.".to_string());
        }
        if self.job_description.trim().is_empty() {
            return Err("Job description is required.".to_string());
        }
        Ok(())
    }
}
