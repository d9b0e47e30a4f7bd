pub mod analytics;
pub mod assignments;
pub mod common;
pub mod session;

pub use common::response::{ApiResponse, EmptyPayload};
