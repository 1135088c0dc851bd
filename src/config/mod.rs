mod server;

pub use server::{Backend, ServerConfig, db_path};
