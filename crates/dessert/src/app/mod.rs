use clap::{Arg, ArgAction, Command};

mod assert;
mod check;
mod list;


pub fn build_cli() -> Command {
    Command::new("dessert")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run named validators and assertions against values")
        .long_about(
            "dessert checks values against a registry of named validators (isString, \
             isPlainObject, ...) and plain truthiness assertions. Values are given as JSON; \
             arguments that are not valid JSON are taken as bare strings. The exit code \
             reports whether the check passed.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file layered over ~/.dessert/config.toml and ./.dessert/config.toml")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(list::subcommand())
        .subcommand(check::subcommand())
        .subcommand(assert::subcommand())
}
