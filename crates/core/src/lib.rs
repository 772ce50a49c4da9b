//! Domain logic for the pantry backend.
//!
//! Everything in this crate is pure: no database, no network. The HTTP and
//! persistence crates call into these modules and own all I/O.

pub mod alternatives;
pub mod error;
pub mod expiry;
pub mod extraction;
pub mod reconciliation;
pub mod staples;
pub mod types;
