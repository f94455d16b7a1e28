//! Agreement rendering through the embedded Typst template

use std::collections::HashMap;

use shared_types::AgreementDocument;
use typst_engine::compiler::{template_request, OutputFormat, RenderStatus};
use typst_engine::compile_document;
use typst_engine::templates::RENTAL_AGREEMENT;

use super::layout::{layout_agreement, AgreementContext};
use crate::error::AgreementError;

pub const DEFAULT_AUTHOR: &str = "Property Doc Generator";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub timeout_ms: u64,
    pub format: OutputFormat,
    /// Document metadata author
    pub author: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            format: OutputFormat::Pdf,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// Lay out and compile one agreement into an in-memory artifact
pub async fn render_agreement(
    ctx: &AgreementContext<'_>,
    options: &RenderOptions,
) -> Result<AgreementDocument, AgreementError> {
    let blocks = layout_agreement(ctx);
    tracing::debug!(
        "Laid out {} block(s) for {}",
        blocks.len(),
        ctx.agreement_number
    );

    let mut inputs = HashMap::new();
    inputs.insert("blocks".to_string(), serde_json::to_value(&blocks)?);
    inputs.insert(
        "title".to_string(),
        serde_json::Value::String(format!("Rental Agreement - {}", ctx.agreement_number)),
    );
    inputs.insert(
        "author".to_string(),
        serde_json::Value::String(options.author.clone()),
    );

    let request = template_request(RENTAL_AGREEMENT, inputs, options.format);
    let response = compile_document(request, options.timeout_ms).await?;

    match response.status {
        RenderStatus::Success => {
            let artifact = response.artifact.ok_or(AgreementError::EmptyArtifact)?;
            Ok(AgreementDocument {
                data: artifact.data,
                mime_type: artifact.mime_type,
                page_count: artifact.page_count,
            })
        }
        RenderStatus::Error => {
            let messages = response
                .errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!("Agreement template failed to compile: {}", messages);
            Err(AgreementError::CompileFailed(messages))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::calculate_total_costs;
    use crate::duration::calculate_duration;
    use crate::validation::fixtures::complete_input;
    use shared_types::AgreementInput;
    use typst_engine::inspect::PdfExtractor;

    async fn render(input: &AgreementInput, options: &RenderOptions) -> AgreementDocument {
        let details = input.agreement_details.as_ref().unwrap();
        let costs = calculate_total_costs(
            details.rent_amount.unwrap(),
            details.maintenance_charges,
            input.services(),
        );
        let ctx = AgreementContext {
            agreement_number: "AGR-1700000000000-007",
            landlord: input.landlord.as_ref().unwrap(),
            tenant: input.tenant.as_ref().unwrap(),
            property: input.property.as_ref().unwrap(),
            details,
            family: input.family(),
            services: input.services(),
            duration: calculate_duration("2024-01-01", "2025-03-15").unwrap(),
            costs: &costs,
        };

        render_agreement(&ctx, options).await.unwrap()
    }

    #[tokio::test]
    async fn test_render_produces_pdf_with_sections_in_order() {
        let document = render(&complete_input(), &RenderOptions::default()).await;

        assert_eq!(document.mime_type, "application/pdf");
        assert!(document.data.starts_with(b"%PDF"));
        assert!(document.page_count >= 1);

        let text = PdfExtractor::extract_text(&document.data).unwrap();
        assert!(text.appear_in_order(&[
            "RENTAL AGREEMENT",
            "AGREEMENT DETAILS",
            "LANDLORD INFORMATION",
            "TENANT INFORMATION",
            "PROPERTY DETAILS",
            "FINANCIAL DETAILS",
            "COST BREAKDOWN",
            "TERMS AND CONDITIONS",
            "SIGNATURES",
        ]));
        assert!(text.contains("Agreement Number: AGR-1700000000000-007"));
        assert!(text.contains("Landlord Signature"));
    }

    #[tokio::test]
    async fn test_long_terms_flow_onto_more_pages() {
        let mut input = complete_input();
        if let Some(details) = input.agreement_details.as_mut() {
            details.terms = Some("The tenant shall keep the premises in good repair. ".repeat(400));
        }

        let document = render(&input, &RenderOptions::default()).await;
        assert!(document.page_count > 1);
    }

    #[tokio::test]
    async fn test_png_preview() {
        let options = RenderOptions {
            format: OutputFormat::Png,
            ..RenderOptions::default()
        };

        let document = render(&complete_input(), &options).await;
        assert_eq!(document.mime_type, "image/png");
    }
}
