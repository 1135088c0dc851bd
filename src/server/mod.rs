//! HTTP surface: public pages, the JSON API and the admin dashboard.

mod admin;
mod api;
pub mod response;
mod router;
mod site;
pub mod validation;

pub use admin::{admin_router, seed_defaults};
pub use api::api_router;
pub use router::{AppState, create_router};
pub use site::site_router;
