//! skillrec - skill-based project recommendations
//!
//! Fit a skill vocabulary once, then rank candidate projects for a
//! person's declared skills.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillrec::Result;
use skillrec::app::{AppContext, env_robot};
use skillrec::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let robot = cli.robot || env_robot();
    init_tracing(&cli, robot);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if robot {
                // Robot mode: JSON error output to stdout
                let error_json = serde_json::json!({
                    "success": false,
                    "code": e.code(),
                    "error": e.to_string(),
                    "recommendations": [],
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    skillrec::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli, robot: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,skillrec=info",
        1 => "info,skillrec=debug",
        2 => "debug,skillrec=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
