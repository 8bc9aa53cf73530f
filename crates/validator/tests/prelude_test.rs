//! Integration tests for the prelude module.
//!
//! Verifies that `use hearth_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use hearth_validator::prelude::*;
use serde_json::json;

#[test]
fn prelude_provides_validators() {
    assert!(validate_email("sam@example.com").is_ok());
    assert!(validate_username("sam").is_ok());
    assert!(validate_iban("DE89 3704 0044 0532 0130 00").is_ok());
    assert!(validate_date_range("2024-01-01", "2024-01-31").is_ok());
    assert_eq!(
        parse_date("01/31/2024").map(|d| d.to_string()).as_deref(),
        Some("2024-01-31")
    );
}

#[test]
fn prelude_provides_rule_trait_and_helpers() {
    let custom = rule(|v| {
        if v == &json!("admin") {
            Err(ValidationError::new("reserved", "That name is reserved"))
        } else {
            Ok(())
        }
    });

    assert!(custom.check(&json!("sam")).is_ok());
    assert!(custom.check(&json!("admin")).is_err());
}

#[test]
fn prelude_provides_form_types() {
    let schema: FormSchema = schema! { "iban" => [iban()] };
    let report: FormReport = validate_form(&json!({ "iban": "nope" }), &schema);
    assert_eq!(
        report.error("iban").map(|e| e.code.as_ref()),
        Some("iban_invalid")
    );
}

#[test]
fn prelude_provides_config_types() {
    let config: Result<FormConfig, ConfigError> =
        FormConfig::from_json_str(r#"{"fields": {"card": [{"rule": "credit_card"}]}}"#);
    let config = config.unwrap();
    assert_eq!(config.fields["card"], [RuleConfig::CreditCard]);
}
