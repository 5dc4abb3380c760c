use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::{MAX_RATING, Testimonial};

use crate::web::forms::{ListQuery, NoticeQuery, TestimonialForm};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, TestimonialFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Testimonial added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/testimonials/new")]
pub async fn testimonial_form(
    req: HttpRequest,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(TestimonialFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: TestimonialForm::default(),
    })
}

#[post("/admin/testimonials")]
pub async fn testimonial_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TestimonialForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(TestimonialFormTemplate {
                notice: None,
                error: Some(e),
                form,
            });
        }
    };

    match db::create_testimonial(&state.pool, &data).await {
        Ok(_) => see_other("/admin/testimonials/new?notice=created"),
        Err(e) => {
            log::error!("Testimonial create failed: {}", e);
            render(TestimonialFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
            })
        }
    }
}

fn card(testimonial: &Testimonial) -> Card {
    Card {
        title: testimonial.name.clone(),
        subtitle: testimonial.designation.clone(),
        body: testimonial.message.clone(),
        meta: format!("Rating: {}/{}", testimonial.rating, MAX_RATING),
    }
}

#[get("/admin/testimonials")]
pub async fn testimonial_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let testimonials = db::list_testimonials(&state.pool).await.unwrap_or_default();

    let filtered: Vec<Testimonial> = testimonials
        .into_iter()
        .filter(|t| contains_ci(&t.name, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Testimonials",
        base_path: "/admin/testimonials",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(testimonial_form)
        .service(testimonial_create)
        .service(testimonial_list);
}
