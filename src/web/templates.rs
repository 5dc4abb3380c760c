use askama::Template;

use newsdesk::common::pagination::Pager;
use newsdesk::models::JobType;

use crate::web::forms::{
    BlogForm, CareerForm, EmployeeForm, NewsForm, ProjectForm, ServiceForm, TeamForm,
    TestimonialForm,
};

/// One tile on the dashboard's per-tag analysis.
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// One entry in a list view. Every entity maps into this shape so all
/// eight list pages share a single template.
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub meta: String,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub news_total: usize,
    pub blog_total: usize,
    pub news_tags: Vec<TagCount>,
    pub blog_tags: Vec<TagCount>,
}

#[derive(Template)]
#[template(path = "admin/list.html")]
pub struct AdminListTemplate {
    pub heading: &'static str,
    pub base_path: &'static str,
    pub query: String,
    pub cards: Vec<Card>,
    pub pager: Pager,
    pub total_items: usize,
}

#[derive(Template)]
#[template(path = "admin/news_form.html")]
pub struct NewsFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: NewsForm,
    pub categories: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "admin/blog_form.html")]
pub struct BlogFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: BlogForm,
}

#[derive(Template)]
#[template(path = "admin/service_form.html")]
pub struct ServiceFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: ServiceForm,
}

#[derive(Template)]
#[template(path = "admin/testimonial_form.html")]
pub struct TestimonialFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: TestimonialForm,
}

#[derive(Template)]
#[template(path = "admin/team_form.html")]
pub struct TeamFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: TeamForm,
}

#[derive(Template)]
#[template(path = "admin/career_form.html")]
pub struct CareerFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: CareerForm,
    pub job_types: &'static [JobType],
}

#[derive(Template)]
#[template(path = "admin/project_form.html")]
pub struct ProjectFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: ProjectForm,
}

#[derive(Template)]
#[template(path = "admin/employee_form.html")]
pub struct EmployeeFormTemplate {
    pub notice: Option<String>,
    pub error: Option<String>,
    pub form: EmployeeForm,
}
