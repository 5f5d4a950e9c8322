use anyhow::Result;

use fight_elo_ranking::cli::Command;
use fight_elo_ranking::{
    handle_compare, handle_completions, handle_history, handle_process, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Process(args) => handle_process(args),
        Command::Serve { port } => handle_serve(*port),
        Command::History { fighter } => handle_history(fighter),
        Command::Compare { first, second } => handle_compare(first, second),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
