//! Template management and embedded templates

pub mod embedded;
pub mod registry;

pub use registry::{get_template_source, parse_template_uri, template_uri, RENTAL_AGREEMENT};
