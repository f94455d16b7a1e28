//! Agreement input validation
//!
//! Each rule module inspects one part of the request and returns its
//! messages; this module concatenates them in a fixed order (landlord,
//! tenant, property, agreement terms) so results are reproducible.

pub mod advisories;
pub mod parties;
pub mod property;
pub mod terms;

use shared_types::{AgreementInput, ValidationResult};

/// Validate a full agreement request.
///
/// Never fails: missing or malformed parts become error messages, and
/// optional-but-recommended gaps become warnings.
pub fn validate_agreement_data(input: &AgreementInput) -> ValidationResult {
    let mut errors = Vec::new();

    errors.extend(parties::check_landlord(input.landlord.as_ref()));
    errors.extend(parties::check_tenant(input.tenant.as_ref()));
    errors.extend(property::check_property(input.property.as_ref()));
    errors.extend(terms::check_agreement_details(
        input.agreement_details.as_ref(),
    ));

    let warnings = advisories::collect_advisories(input);

    tracing::debug!(
        "Validation finished with {} error(s), {} warning(s)",
        errors.len(),
        warnings.len()
    );

    ValidationResult::from_messages(errors, warnings)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use shared_types::*;

    pub fn contact(phone: &str, email: &str) -> Contact {
        Contact {
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
            alternate_phone: None,
        }
    }

    pub fn address(street: &str, city: &str) -> Address {
        Address {
            street: Some(street.to_string()),
            city: Some(city.to_string()),
            state: Some("Maharashtra".to_string()),
            postal_code: Some("411001".to_string()),
            country: Some("India".to_string()),
        }
    }

    /// A request that passes validation with no warnings
    pub fn complete_input() -> AgreementInput {
        AgreementInput {
            landlord: Some(Landlord {
                name: Some("Asha Rao".to_string()),
                contact: Some(contact("+91 98200 00001", "asha@example.com")),
                address: Some(address("7 Hill Road", "Pune")),
                tax_id: Some("ABCDE1234F".to_string()),
                bank_account_number: Some("001100220033".to_string()),
                bank_name: Some("State Bank".to_string()),
                bank_ifsc: Some("SBIN0000001".to_string()),
            }),
            tenant: Some(Tenant {
                name: Some("Vikram Shah".to_string()),
                contact: Some(contact("+91 98200 00002", "vikram@example.com")),
                address: None,
                occupation: Some("Engineer".to_string()),
                employer: Some("Acme Labs".to_string()),
                id_proof_type: Some("Passport".to_string()),
                id_proof_number: Some("P1234567".to_string()),
            }),
            property: Some(Property {
                address: Some(address("12 Lake View Apartments", "Pune")),
                property_type: Some("Apartment".to_string()),
                carpet_area: Some(850.0),
                number_of_bedrooms: Some(2),
                ..Property::default()
            }),
            agreement_details: Some(AgreementDetails {
                start_date: Some("2024-01-01".to_string()),
                end_date: Some("2025-03-15".to_string()),
                rent_amount: Some(1000.0),
                security_deposit: Some(3000.0),
                maintenance_charges: Some(200.0),
                ..AgreementDetails::default()
            }),
            additional_services: Some(vec![AdditionalService {
                service_name: Some("Housekeeping".to_string()),
                cost: Some(300.0),
                billing_frequency: Some("Quarterly".to_string()),
                description: None,
            }]),
            family_members: Some(vec![FamilyMember {
                name: Some("Meera Shah".to_string()),
                relationship: Some("Spouse".to_string()),
                age: Some(31),
                id_proof_type: None,
                id_proof_number: None,
            }]),
        }
    }
}
