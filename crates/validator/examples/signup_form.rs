//! Validates a few signup submissions and prints the reports.
//!
//! Run with `RUST_LOG=hearth_validator=debug` to see per-field events.

use hearth_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

const SIGNUP_FORM: &str = r#"{
    "fields": {
        "email": [{ "rule": "required", "label": "Email" }, { "rule": "email" }],
        "username": [{ "rule": "username" }],
        "password": [{ "rule": "password" }],
        "monthly_budget": [{ "rule": "money", "min": 1, "max": 50000 }]
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let schema = FormConfig::from_json_str(SIGNUP_FORM)?.into_schema()?;

    let submissions = [
        json!({
            "email": "sam@example.com",
            "username": "sam_budgets",
            "password": "Budget2024!",
            "monthly_budget": "2500.00"
        }),
        json!({
            "email": "sam@",
            "username": "s",
            "password": "budget",
            "monthly_budget": "12.345"
        }),
    ];

    for data in &submissions {
        let report = validate_form(data, &schema);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    for candidate in ["", "budget", "Budget2024!"] {
        let strength = password_strength(candidate);
        let (label, score) = (strength.label, strength.score);
        println!("{candidate:>12} -> {label:?} ({score})");
    }

    Ok(())
}
