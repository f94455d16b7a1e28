//! Agreement layout: turns a validated request plus derived values into
//! the ordered block sequence the template renders.

use shared_types::types::present;
use shared_types::{
    format_address, AdditionalService, AgreementDetails, Contact, CostBreakdown,
    DurationBreakdown, FamilyMember, Landlord, Property, Tenant,
};

use super::blocks::{Align, Block, DocumentWriter, SignatureParty, SUBTITLE_SIZE};

const PLACEHOLDER: &str = "N/A";

/// Everything the layout needs for one agreement
#[derive(Debug, Clone, Copy)]
pub struct AgreementContext<'a> {
    pub agreement_number: &'a str,
    pub landlord: &'a Landlord,
    pub tenant: &'a Tenant,
    pub property: &'a Property,
    pub details: &'a AgreementDetails,
    pub family: &'a [FamilyMember],
    pub services: &'a [AdditionalService],
    pub duration: DurationBreakdown,
    pub costs: &'a CostBreakdown,
}

/// Lay out the full agreement. Identical contexts give identical blocks.
pub fn layout_agreement(ctx: &AgreementContext<'_>) -> Vec<Block> {
    let mut doc = DocumentWriter::new();

    doc.title("RENTAL AGREEMENT").move_down(1.0);
    doc.subtitle(format!("Agreement Number: {}", ctx.agreement_number))
        .move_down(2.0);

    agreement_section(&mut doc, ctx);
    landlord_section(&mut doc, ctx.landlord);
    tenant_section(&mut doc, ctx.tenant);
    family_section(&mut doc, ctx.family);
    property_section(&mut doc, ctx.property);
    financial_section(&mut doc, ctx.details, ctx.costs);
    services_section(&mut doc, ctx.services);
    breakdown_section(&mut doc, ctx.costs);
    terms_section(&mut doc, ctx.details);

    doc.heading("SIGNATURES").move_down(1.5);
    doc.signatures(
        SignatureParty::new("Landlord Signature", or_placeholder(&ctx.landlord.name)),
        SignatureParty::new("Tenant Signature", or_placeholder(&ctx.tenant.name)),
    );

    doc.finish()
}

fn or_placeholder(field: &Option<String>) -> &str {
    present(field).unwrap_or(PLACEHOLDER)
}

/// Numbers are only printed when set and non-zero
fn nonzero<T: Default + PartialEq + Copy>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

fn agreement_section(doc: &mut DocumentWriter, ctx: &AgreementContext<'_>) {
    doc.heading("AGREEMENT DETAILS");
    doc.field("Start Date", or_placeholder(&ctx.details.start_date));
    doc.field("End Date", or_placeholder(&ctx.details.end_date));
    doc.field("Duration", ctx.duration.describe());
    doc.field("Total Days", ctx.duration.total_days);
    doc.move_down(1.0);
}

fn contact_lines(doc: &mut DocumentWriter, contact: Option<&Contact>) {
    let Some(contact) = contact else {
        return;
    };

    doc.field("Phone", or_placeholder(&contact.phone));
    doc.field("Email", or_placeholder(&contact.email));
    if let Some(alternate) = present(&contact.alternate_phone) {
        doc.field("Alternate Phone", alternate);
    }
}

fn landlord_section(doc: &mut DocumentWriter, landlord: &Landlord) {
    doc.heading("LANDLORD INFORMATION");
    doc.field("Name", or_placeholder(&landlord.name));
    contact_lines(doc, landlord.contact.as_ref());

    if landlord.address.is_some() {
        doc.field("Address", format_address(landlord.address.as_ref()));
    }
    if let Some(tax_id) = present(&landlord.tax_id) {
        doc.field("Tax ID", tax_id);
    }
    if let Some(account) = present(&landlord.bank_account_number) {
        doc.field("Bank Account", account);
        doc.field("Bank Name", or_placeholder(&landlord.bank_name));
        doc.field("Bank IFSC", or_placeholder(&landlord.bank_ifsc));
    }
    doc.move_down(1.0);
}

fn tenant_section(doc: &mut DocumentWriter, tenant: &Tenant) {
    doc.heading("TENANT INFORMATION");
    doc.field("Name", or_placeholder(&tenant.name));
    contact_lines(doc, tenant.contact.as_ref());

    if let Some(occupation) = present(&tenant.occupation) {
        doc.field("Occupation", occupation);
    }
    if let Some(employer) = present(&tenant.employer) {
        doc.field("Employer", employer);
    }
    if let Some(proof_type) = present(&tenant.id_proof_type) {
        doc.field("ID Proof Type", proof_type);
        doc.field("ID Proof Number", or_placeholder(&tenant.id_proof_number));
    }
    doc.move_down(1.0);
}

fn family_section(doc: &mut DocumentWriter, family: &[FamilyMember]) {
    if family.is_empty() {
        return;
    }

    doc.heading("FAMILY MEMBERS");
    for (index, member) in family.iter().enumerate() {
        let age = nonzero(member.age)
            .map(|age| age.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        doc.line(format!(
            "{}. {} ({}, Age: {})",
            index + 1,
            or_placeholder(&member.name),
            or_placeholder(&member.relationship),
            age
        ));

        if let Some(proof_type) = present(&member.id_proof_type) {
            doc.nested(format!(
                "ID: {} - {}",
                proof_type,
                or_placeholder(&member.id_proof_number)
            ));
        }
    }
    doc.move_down(1.0);
}

fn property_section(doc: &mut DocumentWriter, property: &Property) {
    doc.heading("PROPERTY DETAILS");

    if property.address.is_some() {
        doc.field("Address", format_address(property.address.as_ref()));
    }
    doc.field("Property Type", or_placeholder(&property.property_type));
    if let Some(area) = nonzero(property.carpet_area) {
        doc.line(format!("Carpet Area: {} sq ft", area));
    }
    if let Some(area) = nonzero(property.built_up_area) {
        doc.line(format!("Built-up Area: {} sq ft", area));
    }
    if let Some(status) = present(&property.furnishing_status) {
        doc.field("Furnishing Status", status);
    }
    if let Some(bedrooms) = nonzero(property.number_of_bedrooms) {
        doc.field("Bedrooms", bedrooms);
    }
    if let Some(bathrooms) = nonzero(property.number_of_bathrooms) {
        doc.field("Bathrooms", bathrooms);
    }
    if let Some(floor) = nonzero(property.floor_number) {
        doc.field("Floor Number", floor);
    }
    if let Some(parking) = nonzero(property.parking_spaces) {
        doc.field("Parking Spaces", parking);
    }
    if let Some(amenities) = present(&property.amenities) {
        doc.field("Amenities", amenities);
    }
    doc.move_down(1.0);
}

fn financial_section(doc: &mut DocumentWriter, details: &AgreementDetails, costs: &CostBreakdown) {
    doc.heading("FINANCIAL DETAILS");
    doc.field("Monthly Rent", details.rent_amount.unwrap_or(0.0));
    doc.field("Security Deposit", details.security_deposit.unwrap_or(0.0));
    if let Some(maintenance) = nonzero(details.maintenance_charges) {
        doc.field("Maintenance Charges", maintenance);
    }
    doc.field("Total Monthly Cost", costs.monthly_total);
    doc.field("Total Yearly Cost", costs.yearly_total);
    if let Some(day) = nonzero(details.payment_due_day) {
        doc.line(format!("Payment Due Day: {} of each month", day));
    }
    if let Some(mode) = present(&details.payment_mode) {
        doc.field("Payment Mode", mode);
    }
    doc.move_down(1.0);
}

fn services_section(doc: &mut DocumentWriter, services: &[AdditionalService]) {
    if services.is_empty() {
        return;
    }

    doc.heading("ADDITIONAL SERVICES");
    for (index, service) in services.iter().enumerate() {
        doc.line(format!(
            "{}. {}: {} ({})",
            index + 1,
            present(&service.service_name).unwrap_or("Service"),
            service.cost_or_zero(),
            service.frequency_label()
        ));
        if let Some(description) = present(&service.description) {
            doc.nested(format!("Description: {}", description));
        }
    }
    doc.move_down(1.0);
}

fn breakdown_section(doc: &mut DocumentWriter, costs: &CostBreakdown) {
    if costs.breakdown.is_empty() {
        return;
    }

    doc.heading("COST BREAKDOWN");
    for item in &costs.breakdown {
        doc.line(format!("{}: {} ({})", item.item, item.amount, item.frequency));
    }
    doc.move_down(1.0);
}

fn terms_section(doc: &mut DocumentWriter, details: &AgreementDetails) {
    doc.heading("TERMS AND CONDITIONS");

    if let Some(months) = nonzero(details.lock_in_period) {
        doc.line(format!("Lock-in Period: {} months", months));
    }
    if let Some(days) = nonzero(details.notice_period) {
        doc.line(format!("Notice Period: {} days", days));
    }
    if let Some(percent) = nonzero(details.rent_escalation) {
        doc.line(format!(
            "Rent Escalation: {}% every {} months",
            percent,
            nonzero(details.escalation_frequency).unwrap_or(12)
        ));
    }
    if let Some(terms) = present(&details.terms) {
        doc.move_down(0.5).paragraph(terms);
    }
    if let Some(conditions) = present(&details.special_conditions) {
        doc.move_down(1.0)
            .text("Special Conditions:", SUBTITLE_SIZE, true, Align::Left, 0.0)
            .paragraph(conditions);
    }
    doc.move_down(2.0);
}
