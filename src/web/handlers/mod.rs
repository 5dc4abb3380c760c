pub mod api;
pub mod auth;
pub mod blogs;
pub mod careers;
pub mod dashboard;
pub mod employees;
pub mod news;
pub mod projects;
pub mod services;
pub mod team;
pub mod testimonials;
pub mod uploads;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    dashboard::configure(cfg);
    news::configure(cfg);
    blogs::configure(cfg);
    services::configure(cfg);
    testimonials::configure(cfg);
    team::configure(cfg);
    careers::configure(cfg);
    projects::configure(cfg);
    employees::configure(cfg);
    uploads::configure(cfg);
    api::configure(cfg);
}
