use clap::ArgMatches;
use dessert_core::{CheckMode, Dessert, events};
use serde::Serialize;
use tracing::{error, info};

use super::{exit_failed, parse_value, parse_values};

#[derive(Debug, Serialize)]
struct CheckReport {
    validator: String,
    value: serde_json::Value,
    soft: bool,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub fn handle_check_command(
    namespace: &Dessert,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let validator = matches
        .get_one::<String>("validator")
        .ok_or("validator name is required")?;
    let raw_value = matches
        .get_one::<String>("value")
        .ok_or("value is required")?;
    let soft = matches.get_flag("soft");
    let json_output = matches.get_flag("json");

    let value = parse_value(raw_value);
    let extra = matches
        .get_many::<String>("extra")
        .map(|args| parse_values(args))
        .unwrap_or_default();
    let mode = if soft {
        CheckMode::Soft
    } else {
        CheckMode::Assert
    };

    info!(
        event = "cli.check_started",
        validator = validator.as_str(),
        value_type = value.type_name(),
        soft = soft
    );

    let (passed, message) = match namespace.call(validator, &value, &extra, mode) {
        Ok(outcome) => (outcome.passed(), None),
        Err(e) if e.is_assertion_failure() => (false, Some(e.to_string())),
        Err(e) => {
            eprintln!("Check error: {}", e);
            error!(event = "cli.check_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        let report = CheckReport {
            validator: validator.clone(),
            value: value.to_json(),
            soft,
            passed,
            message: message.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let status = if passed { "PASS" } else { "FAIL" };
        println!("Check: {}", status);
        match message {
            Some(message) => println!("  {}: {}", validator, message),
            None => println!("  {}({})", validator, raw_value),
        }
    }

    info!(event = "cli.check_completed", passed = passed);

    if !passed {
        exit_failed();
    }

    Ok(())
}
