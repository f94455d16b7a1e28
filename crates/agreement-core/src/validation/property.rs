use shared_types::types::present;
use shared_types::Property;

pub fn check_property(property: Option<&Property>) -> Vec<String> {
    let mut errors = Vec::new();

    let street = property
        .and_then(|p| p.address.as_ref())
        .and_then(|a| present(&a.street));
    if street.is_none() {
        errors.push("Property address street is required".to_string());
    }

    if property.and_then(|p| present(&p.property_type)).is_none() {
        errors.push("Property type is required".to_string());
    }

    errors
}
