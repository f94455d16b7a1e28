//! Soft warnings for recommended fields; these never block generation

use shared_types::types::present;
use shared_types::AgreementInput;

pub fn collect_advisories(input: &AgreementInput) -> Vec<String> {
    let mut warnings = Vec::new();
    let landlord = input.landlord.as_ref();

    if landlord.and_then(|l| present(&l.tax_id)).is_none() {
        warnings.push("Landlord tax ID is recommended".to_string());
    }
    if landlord.and_then(|l| present(&l.bank_account_number)).is_none() {
        warnings.push("Landlord bank account number is recommended".to_string());
    }
    if input.tenant.as_ref().and_then(|t| present(&t.occupation)).is_none() {
        warnings.push("Tenant occupation is recommended".to_string());
    }
    if input.family().is_empty() {
        warnings.push("No family members added - consider adding if applicable".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::complete_input;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_request_has_no_advisories() {
        assert!(collect_advisories(&complete_input()).is_empty());
    }

    #[test]
    fn test_advisory_order() {
        assert_eq!(
            collect_advisories(&AgreementInput::default()),
            vec![
                "Landlord tax ID is recommended",
                "Landlord bank account number is recommended",
                "Tenant occupation is recommended",
                "No family members added - consider adding if applicable",
            ]
        );
    }

    #[test]
    fn test_empty_family_list_still_warns() {
        let mut input = complete_input();
        input.family_members = Some(vec![]);

        assert_eq!(
            collect_advisories(&input),
            vec!["No family members added - consider adding if applicable"]
        );
    }
}
