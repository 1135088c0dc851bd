//! Server-rendered public pages.
//!
//! Each page module loads its sections through the [`ContentRepo`](crate::content::ContentRepo)
//! and falls back to built-in content per section, so a page never renders
//! empty even when the backing store is down or unconfigured.

pub mod about;
pub mod academics;
pub mod activities;
pub mod admissions;
pub mod contact;
pub mod faculty;
pub mod fallback;
pub mod gallery;
pub mod home;
pub mod html;
pub mod infrastructure;
pub mod layout;
pub mod news;
pub mod students;

pub use html::{Banner, escape};
pub use layout::{Chrome, render_page};
