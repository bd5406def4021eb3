use std::path::Path;

use clap::ArgMatches;
use dessert_core::{Dessert, DessertConfig, Value, events, init_global};
use tracing::error;

mod assert;
mod check;
mod list;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let namespace = load_namespace(matches)?;

    match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(namespace, sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(namespace, sub_matches),
        Some(("assert", sub_matches)) => assert::handle_assert_command(namespace, sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration and set up the process-wide namespace from it.
fn load_namespace(matches: &ArgMatches) -> Result<&'static Dessert, Box<dyn std::error::Error>> {
    let explicit = matches.get_one::<String>("config").map(Path::new);

    match DessertConfig::load_hierarchy(explicit) {
        Ok(config) => Ok(init_global(config)),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            error!(event = "cli.config_load_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Parse a command-line argument as JSON, falling back to a bare string.
pub(crate) fn parse_value(arg: &str) -> Value {
    Value::from_json_str(arg).unwrap_or_else(|_| Value::from(arg))
}

pub(crate) fn parse_values<'a>(args: impl IntoIterator<Item = &'a String>) -> Vec<Value> {
    args.into_iter().map(|arg| parse_value(arg)).collect()
}

/// Flush stdout and exit with a failure code.
pub(crate) fn exit_failed() -> ! {
    use std::io::Write;
    let _ = std::io::stdout().flush();
    std::process::exit(1);
}
