use actix_web::{HttpRequest, Responder, get, post, web};

use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};
use newsdesk::common::text::contains_ci;
use newsdesk::db;
use newsdesk::models::EmployeeRecord;

use crate::web::forms::{EmployeeForm, ListQuery, NoticeQuery};
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminListTemplate, Card, EmployeeFormTemplate};

fn notice_for(query: &NoticeQuery) -> Option<String> {
    match query.notice.as_deref() {
        Some("created") => Some("Employee details added successfully!".to_string()),
        _ => None,
    }
}

#[get("/admin/employees/new")]
pub async fn employee_form(req: HttpRequest, query: web::Query<NoticeQuery>) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    render(EmployeeFormTemplate {
        notice: notice_for(&query),
        error: None,
        form: EmployeeForm::default(),
    })
}

#[post("/admin/employees")]
pub async fn employee_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<EmployeeForm>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let form = form.into_inner();
    let data = match form.to_create() {
        Ok(data) => data,
        Err(e) => {
            return render(EmployeeFormTemplate {
                notice: None,
                error: Some(e),
                form,
            });
        }
    };

    match db::create_employee_record(&state.pool, &data).await {
        Ok(_) => see_other("/admin/employees/new?notice=created"),
        Err(e) => {
            log::error!("Employee record create failed: {}", e);
            render(EmployeeFormTemplate {
                notice: None,
                error: Some(format!("Error submitting form: {e}")),
                form,
            })
        }
    }
}

fn card(employee: &EmployeeRecord) -> Card {
    let meta = match employee.joining_date {
        Some(date) => format!("Joined {}", date.format("%Y-%m-%d")),
        None => String::new(),
    };

    Card {
        title: employee.employee_name.clone(),
        subtitle: employee.designation.clone(),
        body: employee.skills.clone(),
        meta,
    }
}

#[get("/admin/employees")]
pub async fn employee_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let employees = db::list_employee_records(&state.pool)
        .await
        .unwrap_or_default();

    let filtered: Vec<EmployeeRecord> = employees
        .into_iter()
        .filter(|e| contains_ci(&e.employee_name, &q))
        .collect();

    let page = Page::slice(filtered, query.page.unwrap_or(1), DEFAULT_PAGE_SIZE);

    render(AdminListTemplate {
        heading: "Employees",
        base_path: "/admin/employees",
        query: q,
        cards: page.items.iter().map(card).collect(),
        pager: page.pager(),
        total_items: page.total_items,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(employee_form)
        .service(employee_create)
        .service(employee_list);
}
