//! Application services - the request flows behind each endpoint.
//!
//! Handlers own transport concerns (path parsing, header and body
//! extraction). Services own everything after that: authentication,
//! ownership, validation and the store call, in that order.

mod auth;
mod posts;
mod users;

pub use auth::{AuthService, IssuedToken};
pub use posts::PostService;
pub use users::UserService;

/// Maximum number of records returned by list endpoints.
pub const LIST_LIMIT: u64 = 100;
