//! Agreement term checks: dates and money

use shared_types::types::present;
use shared_types::AgreementDetails;

use crate::duration::parse_instant;

pub fn check_agreement_details(details: Option<&AgreementDetails>) -> Vec<String> {
    let mut errors = Vec::new();

    let start = details.and_then(|d| present(&d.start_date));
    let end = details.and_then(|d| present(&d.end_date));

    if start.is_none() {
        errors.push("Agreement start date is required".to_string());
    }
    if end.is_none() {
        errors.push("Agreement end date is required".to_string());
    }

    // Unparseable dates are left to the duration step, which fails the
    // whole generation with the offending value.
    if let (Some(start), Some(end)) = (start, end) {
        if let (Ok(start), Ok(end)) = (parse_instant(start), parse_instant(end)) {
            if end <= start {
                errors.push("End date must be after start date".to_string());
            }
        }
    }

    let rent = details.and_then(|d| d.rent_amount);
    if !matches!(rent, Some(amount) if amount.is_finite() && amount > 0.0) {
        errors.push("Rent amount must be greater than 0".to_string());
    }

    let deposit = details.and_then(|d| d.security_deposit);
    if !matches!(deposit, Some(amount) if amount.is_finite() && amount >= 0.0) {
        errors.push("Security deposit cannot be negative".to_string());
    }

    errors
}
