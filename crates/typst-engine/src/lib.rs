//! Typst document rendering engine
//!
//! This crate is the page-flowing writer behind agreement generation:
//! - In-memory Typst compilation (no filesystem access)
//! - Embedded document templates driven by `sys.inputs`
//! - Export to PDF/SVG/PNG with a compile timeout
//! - Text extraction from produced PDFs
//!
//! Pagination is entirely Typst's concern; callers describe content and
//! receive finished bytes.

pub mod compiler;
pub mod inspect;
pub mod templates;
pub mod world;

pub use compiler::{compile_document, RenderArtifact, RenderRequest, RenderResponse};
