pub use blogs::*;
pub use careers::*;
pub use db::*;
pub use employees::*;
pub use news::*;
pub use projects::*;
pub use services::*;
pub use team::*;
pub use testimonials::*;

mod blogs;
mod careers;
mod db;
mod employees;
mod news;
mod projects;
mod services;
mod team;
mod testimonials;
