//! Agreement generation pipeline
//!
//! Received -> Validating -> Rejected | Computing -> Rendering -> Completed | Failed
//!
//! Every path ends in an `AgreementResult`; nothing escapes as a panic or
//! an error value.

use chrono::Utc;
use rand_core::{OsRng, RngCore};
use shared_types::types::present;
use shared_types::{format_address, AgreementInput, AgreementResult, AgreementSummary};
use typst_engine::compiler::OutputFormat;

use crate::costs::calculate_total_costs;
use crate::document::{render_agreement, AgreementContext, RenderOptions, DEFAULT_AUTHOR};
use crate::duration::calculate_duration;
use crate::error::AgreementError;
use crate::validation::validate_agreement_data;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Upper bound on template compilation
    pub render_timeout_ms: u64,
    pub format: OutputFormat,
    pub author: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            render_timeout_ms: render.timeout_ms,
            format: render.format,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Received,
    Validating,
    Rejected,
    Computing,
    Rendering,
    Completed,
    Failed,
}

fn enter(stage: GenerationStage) {
    tracing::debug!("Generation stage: {:?}", stage);
}

/// `AGR-<unix millis>-<000..999>`
pub fn generate_agreement_number() -> String {
    let suffix = OsRng.next_u32() % 1000;
    format!("AGR-{}-{:03}", Utc::now().timestamp_millis(), suffix)
}

/// Runs validation, derivation and rendering for one request at a time.
/// Holds only configuration, so clones are cheap and share nothing mutable.
#[derive(Debug, Clone, Default)]
pub struct AgreementGenerator {
    config: GeneratorConfig,
}

impl AgreementGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub async fn generate(&self, input: &AgreementInput) -> AgreementResult {
        self.run(input).await.1
    }

    /// Like [`generate`](Self::generate), also reporting the terminal stage
    /// (`Rejected`, `Completed` or `Failed`)
    pub async fn run(&self, input: &AgreementInput) -> (GenerationStage, AgreementResult) {
        enter(GenerationStage::Received);
        enter(GenerationStage::Validating);

        let validation = validate_agreement_data(input);
        if !validation.is_valid {
            enter(GenerationStage::Rejected);
            return (
                GenerationStage::Rejected,
                AgreementResult::rejected(validation),
            );
        }

        match self.build(input, validation.warnings).await {
            Ok(result) => {
                enter(GenerationStage::Completed);
                tracing::info!(
                    "Generated agreement {}",
                    result.agreement_number.as_deref().unwrap_or_default()
                );
                (GenerationStage::Completed, result)
            }
            Err(err) => {
                enter(GenerationStage::Failed);
                tracing::warn!("Agreement generation failed: {}", err);
                (
                    GenerationStage::Failed,
                    AgreementResult::failed(err.to_string()),
                )
            }
        }
    }

    async fn build(
        &self,
        input: &AgreementInput,
        warnings: Vec<String>,
    ) -> Result<AgreementResult, AgreementError> {
        enter(GenerationStage::Computing);

        let landlord = input
            .landlord
            .as_ref()
            .ok_or(AgreementError::MissingInput("landlord"))?;
        let tenant = input
            .tenant
            .as_ref()
            .ok_or(AgreementError::MissingInput("tenant"))?;
        let property = input
            .property
            .as_ref()
            .ok_or(AgreementError::MissingInput("property"))?;
        let details = input
            .agreement_details
            .as_ref()
            .ok_or(AgreementError::MissingInput("agreement details"))?;

        let start = present(&details.start_date).ok_or(AgreementError::MissingInput("start date"))?;
        let end = present(&details.end_date).ok_or(AgreementError::MissingInput("end date"))?;
        let rent = details
            .rent_amount
            .ok_or(AgreementError::MissingInput("rent amount"))?;

        let duration = calculate_duration(start, end)?;
        let costs = calculate_total_costs(rent, details.maintenance_charges, input.services());
        let agreement_number = generate_agreement_number();

        enter(GenerationStage::Rendering);
        let ctx = AgreementContext {
            agreement_number: &agreement_number,
            landlord,
            tenant,
            property,
            details,
            family: input.family(),
            services: input.services(),
            duration,
            costs: &costs,
        };
        let document = render_agreement(&ctx, &self.render_options()).await?;

        let summary = AgreementSummary {
            landlord_name: present(&landlord.name).unwrap_or_default().to_string(),
            tenant_name: present(&tenant.name).unwrap_or_default().to_string(),
            property_address: format_address(property.address.as_ref()),
            rent_amount: rent,
            duration: duration.describe(),
            total_family_members: input.family().len(),
            total_services: input.services().len(),
            total_monthly_cost: costs.monthly_total,
            total_yearly_cost: costs.yearly_total,
        };

        Ok(AgreementResult::completed(
            agreement_number,
            warnings,
            document,
            summary,
        ))
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            timeout_ms: self.config.render_timeout_ms,
            format: self.config.format,
            author: self.config.author.clone(),
        }
    }
}
