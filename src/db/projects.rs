use sqlx::PgPool;

use crate::models::{ProjectAssignment, ProjectAssignmentCreate};

pub async fn create_project_assignment(
    pool: &PgPool,
    data: &ProjectAssignmentCreate,
) -> Result<ProjectAssignment, sqlx::Error> {
    sqlx::query_as::<_, ProjectAssignment>(
        r#"
        INSERT INTO project_assignments
            (project_name, client_name, assigned_employees,
             start_date, deadline, budget, net_revenue)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&data.project_name)
    .bind(&data.client_name)
    .bind(&data.assigned_employees)
    .bind(data.start_date)
    .bind(data.deadline)
    .bind(data.budget)
    .bind(data.net_revenue)
    .fetch_one(pool)
    .await
}

pub async fn list_project_assignments(
    pool: &PgPool,
) -> Result<Vec<ProjectAssignment>, sqlx::Error> {
    sqlx::query_as::<_, ProjectAssignment>(
        r#"
        SELECT *
        FROM project_assignments
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
