use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::{JobListing, JobType};

use crate::web::forms::{CareerForm, ListQuery, NoticeQuery};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, CareerFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Carrier job added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/careers/new")]
pub async fn career_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(CareerFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: CareerForm::default(),
        job_types: JobType::all(),
    })
}

#[post("/admin/careers")]
pub async fn career_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<CareerForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(CareerFormTemplate {
                notice: None,
                error: Some(e),
                form,
                job_types: JobType::all(),
            });
        }
    };

    match db::create_job_listing(&state.pool, &data).await {
        Ok(_) => see_other("/admin/careers/new?notice=created"),
        Err(e) => {
            log::error!("Job listing create failed: {}", e);
            render(CareerFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
                job_types: JobType::all(),
            })
        }
    }
}

fn card(listing: &JobListing) -> Card {
    let meta = match listing.application_deadline {
        Some(deadline) => format!("Apply by {}", deadline.format("%Y-%m-%d")),
        None => String::new(),
    };

    Card {
        title: listing.job_title.clone(),
        subtitle: listing.company.clone(),
        body: format!("{} · {}", listing.location, listing.job_type),
        meta,
    }
}

#[get("/admin/careers")]
pub async fn career_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let listings = db::list_job_listings(&state.pool).await.unwrap_or_default();

    let filtered: Vec<JobListing> = listings
        .into_iter()
        .filter(|l| contains_ci(&l.job_title, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Careers",
        base_path: "/admin/careers",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(career_form)
        .service(career_create)
        .service(career_list);
}
