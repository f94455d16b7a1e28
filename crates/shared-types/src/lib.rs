pub mod results;
pub mod serde_base64;
pub mod types;

pub use results::{
    AgreementDocument, AgreementResult, AgreementSummary, CostBreakdown, CostItem,
    DurationBreakdown, ValidationResult,
};
pub use types::{
    format_address, AdditionalService, Address, AgreementDetails, AgreementInput,
    BillingFrequency, Contact, FamilyMember, Landlord, Property, Tenant,
};
