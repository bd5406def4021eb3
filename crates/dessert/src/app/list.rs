use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("list")
        .about("List registered validators")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
