use clap::ArgMatches;
use dessert_core::{Dessert, ValidatorKind};
use serde::Serialize;
use tracing::info;

use crate::table;

#[derive(Debug, Serialize)]
struct ValidatorEntry {
    name: String,
    kind: ValidatorKind,
}

pub fn handle_list_command(
    namespace: &Dessert,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let validators = namespace.validators();

    if json_output {
        let entries: Vec<ValidatorEntry> = validators
            .iter()
            .map(|v| ValidatorEntry {
                name: v.name().to_string(),
                kind: v.kind(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("Registered validators:");
        table::print_validators_table(&validators);
    }

    info!(event = "cli.list_completed", count = validators.len());
    Ok(())
}
