mod middleware;
pub mod session;
mod token;

pub use middleware::{AuthError, CurrentAdmin, RequireAdminApi, admin_gate, signed_out_redirect};
pub use session::{GuardDecision, LoginOutcome, SessionLookup};
pub use token::{IssuedToken, TokenGenerator, hash_password, parse_token, verify_password};
