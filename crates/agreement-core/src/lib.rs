pub mod costs;
pub mod document;
pub mod duration;
pub mod error;
pub mod generator;
pub mod patterns;
pub mod validation;

pub use costs::calculate_total_costs;
pub use duration::{calculate_duration, duration_between, parse_instant};
pub use error::AgreementError;
pub use generator::{
    generate_agreement_number, AgreementGenerator, GenerationStage, GeneratorConfig,
};
pub use validation::validate_agreement_data;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AdditionalService, AgreementInput};

    #[test]
    fn test_empty_request_lists_every_required_field() {
        let result = validate_agreement_data(&AgreementInput::default());

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 16);
        assert_eq!(result.errors[0], "Landlord name is required");
        assert_eq!(
            result.errors.last().map(String::as_str),
            Some("Security deposit cannot be negative")
        );
    }

    #[test]
    fn test_derivations_agree_with_each_other() {
        let duration = calculate_duration("2024-01-01", "2025-03-15").unwrap();
        let costs = calculate_total_costs(
            1000.0,
            Some(200.0),
            &[AdditionalService {
                service_name: Some("Parking".to_string()),
                cost: Some(1200.0),
                billing_frequency: Some("yearly".to_string()),
                description: None,
            }],
        );

        assert_eq!(duration.describe(), "1 year(s), 2 month(s), 14 day(s)");
        assert_eq!(costs.monthly_total, 1300.0);
        assert_eq!(costs.yearly_total, costs.monthly_total * 12.0);
    }
}
