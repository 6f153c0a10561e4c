//! Wire types, input validation, and the blocking HTTP client for the
//! monitoring backend's three endpoints.

pub mod client;
pub mod types;
pub mod validate;
