use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProjectAssignment {
    pub id: Uuid,
    pub project_name: String,
    pub client_name: String,
    pub assigned_employees: String,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub budget: Option<i64>,
    pub net_revenue: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAssignmentCreate {
    pub project_name: String,
    pub client_name: String,
    #[serde(default)]
    pub assigned_employees: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub net_revenue: Option<i64>,
}

impl ProjectAssignmentCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.project_name.trim().is_empty() {
            return Err("Project name is required.".to_string());
        }
        if self.client_name.trim().is_empty() {
            return Err("Client name is required.".to_string());
        }
        Ok(())
    }
}
