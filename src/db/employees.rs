use sqlx::PgPool;

use crate::models::{EmployeeRecord, EmployeeRecordCreate};

pub async fn create_employee_record(
    pool: &PgPool,
    data: &EmployeeRecordCreate,
) -> Result<EmployeeRecord, sqlx::Error> {
    sqlx::query_as::<_, EmployeeRecord>(
        r#"
        INSERT INTO employee_records
            (employee_name, designation, address, skills, salary,
             account_number, bank_name, ifsc, branch,
             monthly_performance, joining_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&data.employee_name)
    .bind(&data.designation)
    .bind(&data.address)
    .bind(&data.skills)
    .bind(data.salary)
    .bind(&data.bank_details.account_number)
    .bind(&data.bank_details.bank_name)
    .bind(&data.bank_details.ifsc)
    .bind(&data.bank_details.branch)
    .bind(&data.monthly_performance)
    .bind(data.joining_date)
    .fetch_one(pool)
    .await
}

pub async fn list_employee_records(pool: &PgPool) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeRecord>(
        r#"
        SELECT *
        FROM employee_records
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
