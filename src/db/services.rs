use sqlx::PgPool;

use crate::models::{ServiceOffering, ServiceOfferingCreate};

pub async fn create_service(
    pool: &PgPool,
    data: &ServiceOfferingCreate,
) -> Result<ServiceOffering, sqlx::Error> {
    sqlx::query_as::<_, ServiceOffering>(
        r#"
        INSERT INTO service_offerings (title, description, picture_url)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.picture_url)
    .fetch_one(pool)
    .await
}

pub async fn list_services(pool: &PgPool) -> Result<Vec<ServiceOffering>, sqlx::Error> {
    sqlx::query_as::<_, ServiceOffering>(
        r#"
        SELECT *
        FROM service_offerings
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
