//! Request handlers.
//!
//! Handlers validate input, call into `pantry_core` for domain logic and
//! `pantry_db` repositories for persistence, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod insights;
pub mod items;
