//! Core rendering logic
//!
//! Compilation and export run together on a blocking worker. The caller
//! awaits the worker's join handle under a timeout; only a joined worker
//! yields an artifact, so a half-written output never escapes.

use std::collections::HashMap;
use std::time::Duration;

use typst::diag::{Severity, SourceDiagnostic};
use typst::model::Document;

use super::errors::{CompileError, RenderStatus, ServerError};
use super::output::OutputFormat;
use super::{RenderArtifact, RenderRequest, RenderResponse};
use crate::templates;
use crate::world::VirtualWorld;

/// Compile a Typst document with timeout
pub async fn compile_document(
    request: RenderRequest,
    timeout_ms: u64,
) -> Result<RenderResponse, ServerError> {
    // 1. Resolve source - template URI or raw source
    let source = resolve_source(&request.source)?;

    // 2. Create the in-memory world
    let world = VirtualWorld::new(source, request.inputs)?;
    let format = request.format;
    let ppi = request.ppi;

    // 3. Compile and export off the async executor
    let result = tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(move || compile_and_export(&world, format, ppi)),
    )
    .await;

    // 4. Handle timeout and join error
    match result {
        Ok(Ok(response)) => response,
        Ok(Err(join_error)) => {
            tracing::warn!("Compilation task did not finish: {}", join_error);
            Err(ServerError::TaskFailed(join_error.to_string()))
        }
        Err(_timeout) => {
            tracing::warn!("Compilation exceeded {}ms", timeout_ms);
            Err(ServerError::Timeout(timeout_ms))
        }
    }
}

fn resolve_source(source: &str) -> Result<String, ServerError> {
    match templates::parse_template_uri(source) {
        Some(name) => templates::get_template_source(name),
        None => Ok(source.to_string()),
    }
}

fn compile_and_export(
    world: &VirtualWorld,
    format: OutputFormat,
    ppi: Option<u32>,
) -> Result<RenderResponse, ServerError> {
    let warned = typst::compile(world);
    let compilation_warnings = warned.warnings;

    match warned.output {
        Ok(document) => {
            let artifact = export_document(&document, format, ppi)?;
            let (_, warnings) = categorize_diagnostics(&compilation_warnings);
            tracing::debug!(
                "Compiled {} page(s) to {} ({} bytes)",
                artifact.page_count,
                format,
                artifact.data.len()
            );
            Ok(RenderResponse {
                status: RenderStatus::Success,
                artifact: Some(artifact),
                errors: vec![],
                warnings,
            })
        }
        Err(diagnostics) => {
            let (errors, warnings) = categorize_diagnostics(&diagnostics);

            if errors.is_empty() {
                Err(ServerError::CompileError(vec![CompileError::new(
                    "Compilation failed with unknown error",
                )]))
            } else {
                Ok(RenderResponse {
                    status: RenderStatus::Error,
                    artifact: None,
                    errors,
                    warnings,
                })
            }
        }
    }
}

/// Export a compiled document to the requested format
fn export_document(
    document: &Document,
    format: OutputFormat,
    ppi: Option<u32>,
) -> Result<RenderArtifact, ServerError> {
    let page_count = document.pages.len();

    let data = match format {
        OutputFormat::Pdf => typst_pdf::pdf(document, &typst_pdf::PdfOptions::default())
            .map_err(|e| ServerError::ExportError(format!("PDF export failed: {:?}", e)))?,
        OutputFormat::Svg => {
            let page = document
                .pages
                .first()
                .ok_or_else(|| ServerError::ExportError("Document has no pages".to_string()))?;
            typst_svg::svg(page).into_bytes()
        }
        OutputFormat::Png => {
            let page = document
                .pages
                .first()
                .ok_or_else(|| ServerError::ExportError("Document has no pages".to_string()))?;
            let pixels_per_point = ppi.unwrap_or(144) as f32 / 72.0;
            typst_render::render(page, pixels_per_point)
                .encode_png()
                .map_err(|e| ServerError::ExportError(format!("PNG encoding failed: {}", e)))?
        }
    };

    Ok(RenderArtifact {
        data,
        mime_type: format.mime_type().to_string(),
        page_count,
    })
}

/// Categorize diagnostics into errors and warnings
fn categorize_diagnostics(
    diagnostics: &[SourceDiagnostic],
) -> (Vec<CompileError>, Vec<CompileError>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in diagnostics {
        let mut compile_error = CompileError::new(diag.message.to_string());

        if !diag.hints.is_empty() {
            let hint = diag
                .hints
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            compile_error = compile_error.with_hint(hint);
        }

        match diag.severity {
            Severity::Error => errors.push(compile_error),
            Severity::Warning => warnings.push(compile_error.as_warning()),
        }
    }

    (errors, warnings)
}

/// Build a request for a named embedded template
pub fn template_request(
    name: &str,
    inputs: HashMap<String, serde_json::Value>,
    format: OutputFormat,
) -> RenderRequest {
    RenderRequest {
        source: templates::template_uri(name),
        inputs,
        format,
        ppi: None,
    }
}
