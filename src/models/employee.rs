use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payroll details captured with each employee. Flattened into columns of
/// the employee_records table; nested again in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BankDetails {
    pub account_number: String,
    pub bank_name: String,
    pub ifsc: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EmployeeRecord {
    pub id: Uuid,
    pub employee_name: String,
    pub designation: String,
    pub address: String,
    pub skills: String,
    pub salary: Option<i64>,
    #[sqlx(flatten)]
    pub bank_details: BankDetails,
    pub monthly_performance: String,
    pub joining_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecordCreate {
    pub employee_name: String,
    pub designation: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub bank_details: BankDetails,
    #[serde(default)]
    pub monthly_performance: String,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
}

impl EmployeeRecordCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.employee_name.trim().is_empty() {
            return Err("Employee name is required.".to_string());
        }
        if self.designation.trim().is_empty() {
            return Err("Designation is required.".to_string());
        }
        Ok(())
    }
}
