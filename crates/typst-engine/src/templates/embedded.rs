//! Embedded template loader
//!
//! Templates live under `templates/` and are compiled into the binary.

/// Rental agreement template - loaded from templates/rental_agreement.typ
const RENTAL_AGREEMENT_TEMPLATE: &str = include_str!("../../templates/rental_agreement.typ");

/// Get an embedded template by name
pub fn get_embedded_template(name: &str) -> Option<&'static str> {
    match name {
        "rental_agreement" => Some(RENTAL_AGREEMENT_TEMPLATE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typst::syntax::parse;

    #[test]
    fn test_get_rental_agreement_template() {
        let template = get_embedded_template("rental_agreement").unwrap();
        assert!(template.contains("sys.inputs"));
        assert!(template.contains("signature-block"));
    }

    #[test]
    fn test_rental_agreement_template_parses() {
        let source = get_embedded_template("rental_agreement").unwrap();
        let errors = parse(source).errors();
        assert!(errors.is_empty(), "syntax errors: {:?}", errors);
    }

    #[test]
    fn test_unknown_template() {
        assert!(get_embedded_template("invoice").is_none());
    }
}
