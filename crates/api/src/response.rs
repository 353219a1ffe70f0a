//! Shared response types for API handlers.

use serde::Serialize;

/// Simple `{ "message": ... }` acknowledgement body, used by delete and
/// role-update endpoints that have no entity to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
