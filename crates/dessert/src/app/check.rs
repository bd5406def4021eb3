use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("check")
        .about("Run a named validator against a value (exit code indicates pass/fail)")
        .arg(
            Arg::new("validator")
                .help("Validator name, e.g. isString")
                .required(true),
        )
        .arg(
            Arg::new("value")
                .allow_negative_numbers(true)
                .help("Value to check (JSON, or a bare string)")
                .required(true),
        )
        .arg(
            Arg::new("extra")
                .allow_negative_numbers(true)
                .help("Extra arguments passed to the validator and appended to the failure message")
                .num_args(0..),
        )
        .arg(
            Arg::new("soft")
                .long("soft")
                .help("Report the validator result without treating failure as an assertion")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output the result in JSON format")
                .action(ArgAction::SetTrue),
        )
}
