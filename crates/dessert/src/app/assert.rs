use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("assert")
        .about("Assert that a value is truthy (exit code indicates pass/fail)")
        .arg(
            Arg::new("value")
                .allow_negative_numbers(true)
                .help("Value to test for truthiness (JSON, or a bare string)")
                .required(true),
        )
        .arg(
            Arg::new("message")
                .allow_negative_numbers(true)
                .help("Message parts reported on failure")
                .num_args(0..),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output the result in JSON format")
                .action(ArgAction::SetTrue),
        )
}
