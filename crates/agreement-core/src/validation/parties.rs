//! Landlord and tenant checks

use shared_types::types::present;
use shared_types::{Contact, Landlord, Tenant};

use crate::patterns::is_valid_email;

/// Name, phone and email rules shared by both parties.
///
/// `role` is the capitalized party label used as the message prefix and
/// `name` is already filtered through [`present`].
fn check_identity(role: &str, name: Option<&str>, contact: Option<&Contact>) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_none() {
        errors.push(format!("{} name is required", role));
    }

    let phone = contact.and_then(|c| present(&c.phone));
    if phone.is_none() {
        errors.push(format!("{} phone number is required", role));
    }

    // Blankness is judged trimmed, the pattern sees the raw value
    let email = contact.and_then(|c| present(&c.email).and(c.email.as_deref()));
    match email {
        None => errors.push(format!("{} email is required", role)),
        Some(email) if !is_valid_email(email) => {
            errors.push(format!("{} email is invalid", role));
        }
        Some(_) => {}
    }

    errors
}

pub fn check_landlord(landlord: Option<&Landlord>) -> Vec<String> {
    let mut errors = check_identity(
        "Landlord",
        landlord.and_then(|l| present(&l.name)),
        landlord.and_then(|l| l.contact.as_ref()),
    );

    let address = landlord.and_then(|l| l.address.as_ref());
    if address.and_then(|a| present(&a.street)).is_none() {
        errors.push("Landlord address street is required".to_string());
    }
    if address.and_then(|a| present(&a.city)).is_none() {
        errors.push("Landlord address city is required".to_string());
    }

    errors
}

pub fn check_tenant(tenant: Option<&Tenant>) -> Vec<String> {
    let mut errors = check_identity(
        "Tenant",
        tenant.and_then(|t| present(&t.name)),
        tenant.and_then(|t| t.contact.as_ref()),
    );

    if tenant.and_then(|t| present(&t.id_proof_type)).is_none() {
        errors.push("Tenant ID proof type is required".to_string());
    }
    if tenant.and_then(|t| present(&t.id_proof_number)).is_none() {
        errors.push("Tenant ID proof number is required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures::{address, contact};

    #[test]
    fn test_absent_landlord_reports_all_landlord_rules() {
        let errors = check_landlord(None);
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| e.starts_with("Landlord")));
    }

    #[test]
    fn test_invalid_email_is_not_reported_as_missing() {
        let landlord = Landlord {
            name: Some("Asha".to_string()),
            contact: Some(contact("123", "asha.example.com")),
            address: Some(address("7 Hill Road", "Pune")),
            ..Landlord::default()
        };

        assert_eq!(check_landlord(Some(&landlord)), vec!["Landlord email is invalid"]);
    }

    #[test]
    fn test_padded_email_is_invalid() {
        let tenant = Tenant {
            name: Some("Vikram".to_string()),
            contact: Some(contact("123", " vikram@example.com ")),
            id_proof_type: Some("Passport".to_string()),
            id_proof_number: Some("P1".to_string()),
            ..Tenant::default()
        };
        assert_eq!(check_tenant(Some(&tenant)), vec!["Tenant email is invalid"]);

        let tenant = Tenant {
            contact: Some(contact("123", "   ")),
            ..tenant
        };
        assert_eq!(check_tenant(Some(&tenant)), vec!["Tenant email is required"]);
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        let tenant = Tenant {
            name: Some("   ".to_string()),
            contact: Some(contact("123", "t@example.com")),
            id_proof_type: Some("Passport".to_string()),
            id_proof_number: Some("P1".to_string()),
            ..Tenant::default()
        };

        assert_eq!(check_tenant(Some(&tenant)), vec!["Tenant name is required"]);
    }

    #[test]
    fn test_tenant_without_contact() {
        let tenant = Tenant {
            name: Some("Vikram".to_string()),
            id_proof_type: Some("Passport".to_string()),
            ..Tenant::default()
        };

        assert_eq!(
            check_tenant(Some(&tenant)),
            vec![
                "Tenant phone number is required",
                "Tenant email is required",
                "Tenant ID proof number is required",
            ]
        );
    }
}
