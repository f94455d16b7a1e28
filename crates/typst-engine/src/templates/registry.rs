//! Template registry and metadata

use super::embedded;
use crate::compiler::errors::ServerError;

const TEMPLATE_URI_PREFIX: &str = "typst://templates/";

/// Name of the rental agreement layout template
pub const RENTAL_AGREEMENT: &str = "rental_agreement";

/// Get the source of a template by name
pub fn get_template_source(name: &str) -> Result<String, ServerError> {
    embedded::get_embedded_template(name)
        .map(str::to_string)
        .ok_or_else(|| ServerError::TemplateNotFound(name.to_string()))
}

pub fn template_uri(name: &str) -> String {
    format!("{}{}", TEMPLATE_URI_PREFIX, name)
}

/// Extract the template name from a `typst://templates/<name>` URI
pub fn parse_template_uri(uri: &str) -> Option<&str> {
    uri.strip_prefix(TEMPLATE_URI_PREFIX)
}
