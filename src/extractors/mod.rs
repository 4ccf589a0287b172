//! Request extractors.

mod content_type;
pub use content_type::{check_content_type, JsonContentType, JSON_MEDIA_TYPE};
