pub use auth::*;

mod auth;
