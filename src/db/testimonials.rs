use sqlx::PgPool;

use crate::models::{Testimonial, TestimonialCreate};

pub async fn create_testimonial(
    pool: &PgPool,
    data: &TestimonialCreate,
) -> Result<Testimonial, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials (name, designation, message, profile_picture_url, rating)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.designation)
    .bind(&data.message)
    .bind(&data.profile_picture_url)
    .bind(data.rating)
    .fetch_one(pool)
    .await
}

pub async fn list_testimonials(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT *
        FROM testimonials
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
