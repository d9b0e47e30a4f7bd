pub mod dates;
pub mod generation;
pub mod validate;

pub use dates::{format_due_date, parse_due_date};
pub use generation::{Generation, RequestGenerations};
pub use validate::{cookie_value, portal_path, validate_selected_file};
