mod content_type;

pub use content_type::ContentType;
