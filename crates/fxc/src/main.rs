use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{CommandContext, CommandError, FilterOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Some(Commands::List {
            kind,
            input,
            query,
            status,
            from,
            to,
            limit,
            all,
        }) => commands::list::execute(
            &ctx,
            &commands::list::ListOptions {
                kind: *kind,
                input: input.clone(),
                filter: FilterOptions {
                    query: query.clone(),
                    status: status.clone(),
                    from: *from,
                    to: *to,
                },
                limit: *limit,
                all: *all,
            },
        ),
        Some(Commands::Export {
            kind,
            input,
            query,
            status,
            from,
            to,
            output,
        }) => commands::export::execute(
            &ctx,
            &commands::export::ExportOptions {
                kind: *kind,
                input: input.clone(),
                filter: FilterOptions {
                    query: query.clone(),
                    status: status.clone(),
                    from: *from,
                    to: *to,
                },
                output: output.clone(),
            },
        ),
        Some(Commands::Stats { input, from, to }) => commands::stats::execute(
            &ctx,
            &commands::stats::StatsOptions {
                input: input.clone(),
                from: *from,
                to: *to,
            },
        ),
        Some(Commands::Config { command }) => commands::config::execute(&ctx, command),
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell).map_err(CommandError::Io)
        }
        None => {
            if !ctx.quiet {
                println!("fxc - filoxenia console");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Export(_) => "EXPORT_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Export(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
