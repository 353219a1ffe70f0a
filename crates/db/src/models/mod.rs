//! Entity models and DTOs, one submodule per table.

pub mod comment;
pub mod news;
pub mod user;
