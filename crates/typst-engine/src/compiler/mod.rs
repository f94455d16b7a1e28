//! Typst compilation wrapper with timeout and error handling

pub mod errors;
pub mod output;
pub mod render;

pub use errors::{CompileError, RenderStatus, ServerError};
pub use output::OutputFormat;
pub use render::{compile_document, template_request};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request to render a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Raw Typst source code or a `typst://templates/<name>` URI
    pub source: String,
    /// Variables injected into sys.inputs
    #[serde(default)]
    pub inputs: HashMap<String, serde_json::Value>,
    /// Output format (pdf, svg, png)
    #[serde(default)]
    pub format: OutputFormat,
    /// Pixels per inch for PNG output
    pub ppi: Option<u32>,
}

/// Response from rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub status: RenderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<RenderArtifact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<CompileError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CompileError>,
}

/// Rendered artifact held in memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderArtifact {
    /// Raw output bytes; base64 on the wire
    #[serde(with = "shared_types::serde_base64")]
    pub data: Vec<u8>,
    pub mime_type: String,
    pub page_count: usize,
}
