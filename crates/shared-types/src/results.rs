//! Derived values and the response shapes returned to callers

use serde::{Deserialize, Serialize};

/// Outcome of checking an agreement request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Build a result whose validity is derived from the error list
    pub fn from_messages(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Calendar-aware lease length
///
/// `total_days` is the true elapsed day count and is not derived from the
/// other three fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: i64,
    pub total_days: i64,
}

impl DurationBreakdown {
    /// "1 year(s), 2 month(s), 14 day(s)"
    pub fn describe(&self) -> String {
        format!(
            "{} year(s), {} month(s), {} day(s)",
            self.years, self.months, self.days
        )
    }
}

/// One contributing charge as it appears in the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub item: String,
    pub amount: f64,
    pub frequency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub monthly_total: f64,
    pub yearly_total: f64,
    pub breakdown: Vec<CostItem>,
}

/// Denormalized, human-readable totals for a generated agreement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementSummary {
    pub landlord_name: String,
    pub tenant_name: String,
    pub property_address: String,
    pub rent_amount: f64,
    pub duration: String,
    pub total_family_members: usize,
    pub total_services: usize,
    pub total_monthly_cost: f64,
    pub total_yearly_cost: f64,
}

/// The rendered agreement artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementDocument {
    #[serde(with = "crate::serde_base64")]
    pub data: Vec<u8>,
    pub mime_type: String,
    pub page_count: usize,
}

/// Response to a generate request
///
/// Exactly one of the success or failure shapes is populated: the number,
/// document and summary are present only when `success` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementResult {
    pub success: bool,
    pub agreement_number: Option<String>,
    pub message: String,
    pub errors: Vec<String>,
    pub validation_warnings: Vec<String>,
    pub document: Option<AgreementDocument>,
    pub agreement_summary: Option<AgreementSummary>,
}

impl AgreementResult {
    pub fn rejected(validation: ValidationResult) -> Self {
        Self {
            success: false,
            agreement_number: None,
            message: "Validation failed".to_string(),
            errors: validation.errors,
            validation_warnings: validation.warnings,
            document: None,
            agreement_summary: None,
        }
    }

    pub fn completed(
        agreement_number: String,
        warnings: Vec<String>,
        document: AgreementDocument,
        summary: AgreementSummary,
    ) -> Self {
        Self {
            success: true,
            agreement_number: Some(agreement_number),
            message: "Rental agreement generated successfully".to_string(),
            errors: Vec::new(),
            validation_warnings: warnings,
            document: Some(document),
            agreement_summary: Some(summary),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            success: false,
            agreement_number: None,
            message: format!("Error generating agreement: {}", reason),
            errors: vec![reason],
            validation_warnings: Vec::new(),
            document: None,
            agreement_summary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validity_follows_errors() {
        let ok = ValidationResult::from_messages(vec![], vec!["warn".to_string()]);
        assert!(ok.is_valid);

        let bad = ValidationResult::from_messages(vec!["err".to_string()], vec![]);
        assert!(!bad.is_valid);
    }

    #[test]
    fn test_duration_description() {
        let duration = DurationBreakdown {
            years: 1,
            months: 2,
            days: 14,
            total_days: 439,
        };
        assert_eq!(duration.describe(), "1 year(s), 2 month(s), 14 day(s)");
    }

    #[test]
    fn test_failed_result_carries_reason_once() {
        let result = AgreementResult::failed("Invalid date: tomorrow");

        assert!(!result.success);
        assert_eq!(result.message, "Error generating agreement: Invalid date: tomorrow");
        assert_eq!(result.errors, vec!["Invalid date: tomorrow".to_string()]);
        assert!(result.agreement_number.is_none());
        assert!(result.document.is_none());
        assert!(result.agreement_summary.is_none());
    }

    #[test]
    fn test_document_bytes_serialize_as_base64() {
        let document = AgreementDocument {
            data: b"%PDF".to_vec(),
            mime_type: "application/pdf".to_string(),
            page_count: 1,
        };

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["data"], "JVBERg==");
        assert_eq!(json["mimeType"], "application/pdf");

        let back: AgreementDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, document);
    }
}
