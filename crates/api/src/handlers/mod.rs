//! Request handlers, one submodule per resource.
//!
//! Handlers authenticate via extractors, resolve the target row (existence
//! before ownership), consult `newswire_core::policy`, then delegate to the
//! repositories in `newswire_db`, mapping errors via [`crate::error::AppError`].

pub mod auth;
pub mod comment;
pub mod news;
pub mod user;
