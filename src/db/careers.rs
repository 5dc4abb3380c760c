use sqlx::PgPool;

use crate::models::{JobListing, JobListingCreate};

pub async fn create_job_listing(
    pool: &PgPool,
    data: &JobListingCreate,
) -> Result<JobListing, sqlx::Error> {
    sqlx::query_as::<_, JobListing>(
        r#"
        INSERT INTO job_listings
            (job_title, job_description, company, location, salary, job_type,
             application_deadline, responsibilities, requirements, tools_and_technologies)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&data.job_title)
    .bind(&data.job_description)
    .bind(&data.company)
    .bind(&data.location)
    .bind(data.salary)
    .bind(data.job_type)
    .bind(data.application_deadline)
    .bind(&data.responsibilities)
    .bind(&data.requirements)
    .bind(&data.tools_and_technologies)
    .fetch_one(pool)
    .await
}

pub async fn list_job_listings(pool: &PgPool) -> Result<Vec<JobListing>, sqlx::Error> {
    sqlx::query_as::<_, JobListing>(
        r#"
        SELECT *
        FROM job_listings
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
