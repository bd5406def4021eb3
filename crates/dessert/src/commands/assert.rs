use clap::ArgMatches;
use dessert_core::Dessert;
use serde::Serialize;
use tracing::info;

use super::{exit_failed, parse_value, parse_values};

#[derive(Debug, Serialize)]
struct AssertReport {
    value: serde_json::Value,
    truthy: bool,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub fn handle_assert_command(
    namespace: &Dessert,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw_value = matches
        .get_one::<String>("value")
        .ok_or("value is required")?;
    let json_output = matches.get_flag("json");

    let value = parse_value(raw_value);
    let message_parts = matches
        .get_many::<String>("message")
        .map(|args| parse_values(args))
        .unwrap_or_default();
    let truthy = value.is_truthy();

    info!(event = "cli.assert_started", value_type = value.type_name());

    // Only assertion failures can come out of `assert`
    let message = namespace
        .assert(value.clone(), &message_parts)
        .err()
        .map(|e| e.to_string());
    let passed = message.is_none();

    if json_output {
        let report = AssertReport {
            value: value.to_json(),
            truthy,
            passed,
            message: message.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let status = if passed { "PASS" } else { "FAIL" };
        println!("Assertion: {}", status);
        if let Some(message) = message {
            println!("  {}", message);
        } else if !truthy {
            println!("  falsy value {} handled by configured policy", value);
        }
    }

    info!(event = "cli.assert_completed", passed = passed);

    if !passed {
        exit_failed();
    }

    Ok(())
}
