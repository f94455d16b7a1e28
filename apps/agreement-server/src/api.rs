//! API handlers for the agreement server
//!
//! Provides REST endpoints for:
//! - Agreement generation and validation
//! - Duration and cost derivation
//! - Document type dispatch

use agreement_core::{
    calculate_duration, calculate_total_costs, validate_agreement_data, GenerationStage,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use shared_types::{
    AdditionalService, AgreementInput, AgreementResult, CostBreakdown, DurationBreakdown,
    ValidationResult,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "agreement-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /api/agreements/generate
///
/// The body is always the full result; the status tells rejected (400)
/// and failed (500) apart from success.
pub async fn handle_generate_agreement(
    State(state): State<AppState>,
    Json(input): Json<AgreementInput>,
) -> (StatusCode, Json<AgreementResult>) {
    info!("Generate agreement request");

    let (stage, result) = state.generator.run(&input).await;

    let status = match stage {
        GenerationStage::Rejected => StatusCode::BAD_REQUEST,
        GenerationStage::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };

    (status, Json(result))
}

/// Handler: POST /api/agreements/validate
pub async fn handle_validate_agreement(
    Json(input): Json<AgreementInput>,
) -> Json<ValidationResult> {
    let result = validate_agreement_data(&input);
    debug!(
        "Validation request: valid={}, {} error(s)",
        result.is_valid,
        result.errors.len()
    );
    Json(result)
}

/// Duration request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Handler: POST /api/agreements/duration
pub async fn handle_calculate_duration(
    Json(req): Json<DurationRequest>,
) -> Result<Json<DurationBreakdown>, ApiError> {
    let start = req
        .start_date
        .ok_or_else(|| ApiError::InvalidRequest("startDate is required".to_string()))?;
    let end = req
        .end_date
        .ok_or_else(|| ApiError::InvalidRequest("endDate is required".to_string()))?;

    let duration = calculate_duration(&start, &end)?;
    debug!("Duration {} -> {}: {}", start, end, duration.describe());

    Ok(Json(duration))
}

/// Cost request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    pub rent_amount: f64,
    #[serde(default)]
    pub maintenance_charges: Option<f64>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
}

/// Handler: POST /api/agreements/costs
pub async fn handle_calculate_costs(Json(req): Json<CostRequest>) -> Json<CostBreakdown> {
    Json(calculate_total_costs(
        req.rent_amount,
        req.maintenance_charges,
        &req.additional_services,
    ))
}

/// Document generation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub doc_type: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub success: bool,
    pub message: String,
}

/// Handler: POST /api/documents/generate
///
/// Document types are matched exactly: `PDF` or `DOCX`.
pub async fn handle_generate_document(
    Json(req): Json<DocumentRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    info!("Document request for {}", req.doc_type);

    let message = match req.doc_type.as_str() {
        "PDF" => format!(
            "PDF document class implementation generated with content length: {}",
            req.content.chars().count()
        ),
        "DOCX" => "DOCX document class implementation generated.".to_string(),
        other => return Err(ApiError::UnsupportedDocumentType(other.to_string())),
    };

    Ok(Json(DocumentResponse {
        success: true,
        message,
    }))
}
