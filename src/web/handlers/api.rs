//! JSON API mirroring the admin pages: `GET /api/<entity>` returns the
//! collection wrapped in the `{ "data": [...] }` envelope the site's
//! consumers expect; `POST /api/<entity>` creates one record from a JSON
//! body and returns it with 201.

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use newsdesk::db;
use newsdesk::models::{
    BlogPostCreate, EmployeeRecordCreate, JobListingCreate, NewsArticleCreate,
    ProjectAssignmentCreate, ServiceOfferingCreate, TeamMemberCreate, TestimonialCreate,
};

use crate::web::state::AppState;

#[derive(Serialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

fn list_response<T: Serialize>(result: Result<Vec<T>, sqlx::Error>, what: &str) -> HttpResponse {
    match result {
        Ok(items) => HttpResponse::Ok().json(DataEnvelope { data: items }),
        Err(e) => {
            log::error!("Failed to list {}: {}", what, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Failed to fetch {what}."))
        }
    }
}

fn create_response<T: Serialize>(result: Result<T, sqlx::Error>, what: &str) -> HttpResponse {
    match result {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => {
            log::error!("Failed to create {}: {}", what, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Failed to create {what}."))
        }
    }
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

#[get("/api/news")]
pub async fn api_news_list(state: web::Data<AppState>) -> impl Responder {
    list_response(db::list_news(&state.pool).await, "news")
}

#[post("/api/news")]
pub async fn api_news_create(
    state: web::Data<AppState>,
    body: web::Json<NewsArticleCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(db::create_news(&state.pool, &data).await, "news")
}

#[get("/api/blogs")]
pub async fn api_blog_list(state: web::Data<AppState>) -> impl Responder {
    list_response(db::list_blog_posts(&state.pool).await, "blogs")
}

#[post("/api/blogs")]
pub async fn api_blog_create(
    state: web::Data<AppState>,
    body: web::Json<BlogPostCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(db::create_blog_post(&state.pool, &data).await, "blog")
}

#[get("/api/services")]
pub async fn api_service_list(state: web::Data<AppState>) -> impl Responder {
    list_response(db::list_services(&state.pool).await, "services")
}

#[post("/api/services")]
pub async fn api_service_create(
    state: web::Data<AppState>,
    body: web::Json<ServiceOfferingCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(db::create_service(&state.pool, &data).await, "service")
}

#[get("/api/testimonials")]
pub async fn api_testimonial_list(state: web::Data<AppState>) -> impl Responder {
    list_response(db::list_testimonials(&state.pool).await, "testimonials")
}

#[post("/api/testimonials")]
pub async fn api_testimonial_create(
    state: web::Data<AppState>,
    body: web::Json<TestimonialCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(
        db::create_testimonial(&state.pool, &data).await,
        "testimonial",
    )
}

#[get("/api/team")]
pub async fn api_team_list(state: web::Data<AppState>) -> impl Responder {
    list_response(db::list_team_members(&state.pool).await, "team members")
}

#[post("/api/team")]
pub async fn api_team_create(
    state: web::Data<AppState>,
    body: web::Json<TeamMemberCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(
        db::create_team_member(&state.pool, &data).await,
        "team member",
    )
}

#[get("/api/careers")]
pub async fn api_career_list(state: web::Data<AppState>) -> impl Responder {
    list_response(db::list_job_listings(&state.pool).await, "job listings")
}

#[post("/api/careers")]
pub async fn api_career_create(
    state: web::Data<AppState>,
    body: web::Json<JobListingCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(
        db::create_job_listing(&state.pool, &data).await,
        "job listing",
    )
}

#[get("/api/projects")]
pub async fn api_project_list(state: web::Data<AppState>) -> impl Responder {
    list_response(
        db::list_project_assignments(&state.pool).await,
        "project assignments",
    )
}

#[post("/api/projects")]
pub async fn api_project_create(
    state: web::Data<AppState>,
    body: web::Json<ProjectAssignmentCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(
        db::create_project_assignment(&state.pool, &data).await,
        "project assignment",
    )
}

#[get("/api/employees")]
pub async fn api_employee_list(state: web::Data<AppState>) -> impl Responder {
    list_response(
        db::list_employee_records(&state.pool).await,
        "employee records",
    )
}

#[post("/api/employees")]
pub async fn api_employee_create(
    state: web::Data<AppState>,
    body: web::Json<EmployeeRecordCreate>,
) -> impl Responder {
    let data = body.into_inner();
    if let Err(e) = data.validate() {
        return bad_request(e);
    }
    create_response(
        db::create_employee_record(&state.pool, &data).await,
        "employee record",
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_news_list)
        .service(api_news_create)
        .service(api_blog_list)
        .service(api_blog_create)
        .service(api_service_list)
        .service(api_service_create)
        .service(api_testimonial_list)
        .service(api_testimonial_create)
        .service(api_team_list)
        .service(api_team_create)
        .service(api_career_list)
        .service(api_career_create)
        .service(api_project_list)
        .service(api_project_create)
        .service(api_employee_list)
        .service(api_employee_create);
}
