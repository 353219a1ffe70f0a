//! Domain types and pure decision logic shared by the db and api crates.
//!
//! - [`roles`] -- the closed role enumeration.
//! - [`policy`] -- authorization decisions (create / mutate permissions).
//! - [`upload`] -- image upload validation (MIME allow-list, size cap).
//! - [`pagination`] -- page/limit normalization for list endpoints.

pub mod error;
pub mod pagination;
pub mod policy;
pub mod roles;
pub mod types;
pub mod upload;
