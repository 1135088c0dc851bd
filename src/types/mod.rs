mod icon;
mod models;
mod status;
mod table;

pub use icon::{Icon, UnknownIcon};
pub use models::*;
pub use status::{AdmissionStatus, ContactStatus};
pub use table::{Column, ColumnKind, Table};
