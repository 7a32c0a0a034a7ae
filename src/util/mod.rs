//! Shared utilities: display-width text handling and URL validation.

pub mod text;
pub mod url_validator;

pub use text::{sanitize_field, truncate_to_width};
pub use url_validator::{validate_link_for_open, validate_url, UrlValidationError};
