//! Request-scoped input types for rental agreement generation
//!
//! Every field is optional on the wire. Required-ness is decided by the
//! validator, not by deserialization, so a partially filled request still
//! produces a full list of validation messages.

use serde::{Deserialize, Serialize};

/// Returns the trimmed value when the field holds a non-blank string
pub fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub alternate_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Join the present address parts with ", " (street, city, state, postal code, country)
pub fn format_address(address: Option<&Address>) -> String {
    let Some(address) = address else {
        return String::new();
    };

    [
        &address.street,
        &address.city,
        &address.state,
        &address.postal_code,
        &address.country,
    ]
    .into_iter()
    .filter_map(present)
    .collect::<Vec<_>>()
    .join(", ")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landlord {
    pub name: Option<String>,
    pub contact: Option<Contact>,
    pub address: Option<Address>,
    #[serde(rename = "taxID")]
    pub tax_id: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_name: Option<String>,
    #[serde(rename = "bankIFSC")]
    pub bank_ifsc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub name: Option<String>,
    pub contact: Option<Contact>,
    pub address: Option<Address>,
    pub occupation: Option<String>,
    pub employer: Option<String>,
    pub id_proof_type: Option<String>,
    pub id_proof_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub address: Option<Address>,
    pub property_type: Option<String>,
    /// Square feet
    pub carpet_area: Option<f64>,
    /// Square feet
    pub built_up_area: Option<f64>,
    pub furnishing_status: Option<String>,
    pub number_of_bedrooms: Option<u32>,
    pub number_of_bathrooms: Option<u32>,
    pub floor_number: Option<i32>,
    pub parking_spaces: Option<u32>,
    pub amenities: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementDetails {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub rent_amount: Option<f64>,
    pub security_deposit: Option<f64>,
    pub maintenance_charges: Option<f64>,
    /// Months
    pub lock_in_period: Option<u32>,
    /// Days
    pub notice_period: Option<u32>,
    /// Percent per escalation step
    pub rent_escalation: Option<f64>,
    /// Months between escalations
    pub escalation_frequency: Option<u32>,
    pub payment_due_day: Option<u32>,
    pub payment_mode: Option<String>,
    pub terms: Option<String>,
    pub special_conditions: Option<String>,
}

/// Cadence at which an additional service is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BillingFrequency {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    OneTime,
}

impl BillingFrequency {
    /// Parse a raw frequency label, ignoring case.
    ///
    /// Returns `None` for labels outside the closed set so callers can
    /// decide how to treat them.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "monthly" => Some(BillingFrequency::Monthly),
            "quarterly" => Some(BillingFrequency::Quarterly),
            "yearly" => Some(BillingFrequency::Yearly),
            "onetime" => Some(BillingFrequency::OneTime),
            _ => None,
        }
    }

    /// Parse with the permissive fallback: absent or unknown labels bill monthly
    pub fn parse_or_monthly(label: Option<&str>) -> Self {
        label.and_then(Self::parse).unwrap_or_default()
    }

    /// Convert a charge billed at this cadence to its monthly contribution
    pub fn monthly_equivalent(self, cost: f64) -> f64 {
        match self {
            BillingFrequency::Monthly => cost,
            BillingFrequency::Quarterly => cost / 3.0,
            BillingFrequency::Yearly => cost / 12.0,
            BillingFrequency::OneTime => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingFrequency::Monthly => "Monthly",
            BillingFrequency::Quarterly => "Quarterly",
            BillingFrequency::Yearly => "Yearly",
            BillingFrequency::OneTime => "OneTime",
        }
    }
}

impl std::fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalService {
    pub service_name: Option<String>,
    pub cost: Option<f64>,
    /// Raw label as submitted; see [`BillingFrequency::parse`]
    pub billing_frequency: Option<String>,
    pub description: Option<String>,
}

impl AdditionalService {
    /// Frequency label shown to readers: the submitted text, or "Monthly"
    pub fn frequency_label(&self) -> &str {
        present(&self.billing_frequency).unwrap_or("Monthly")
    }

    pub fn frequency(&self) -> BillingFrequency {
        BillingFrequency::parse_or_monthly(present(&self.billing_frequency))
    }

    pub fn cost_or_zero(&self) -> f64 {
        self.cost.filter(|cost| cost.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub age: Option<u32>,
    pub id_proof_type: Option<String>,
    pub id_proof_number: Option<String>,
}

/// Everything a caller submits for one agreement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementInput {
    pub landlord: Option<Landlord>,
    pub tenant: Option<Tenant>,
    pub property: Option<Property>,
    pub agreement_details: Option<AgreementDetails>,
    pub additional_services: Option<Vec<AdditionalService>>,
    pub family_members: Option<Vec<FamilyMember>>,
}

impl AgreementInput {
    pub fn services(&self) -> &[AdditionalService] {
        self.additional_services.as_deref().unwrap_or_default()
    }

    pub fn family(&self) -> &[FamilyMember] {
        self.family_members.as_deref().unwrap_or_default()
    }
}
