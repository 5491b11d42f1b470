//! `contactsync` command-line entry point.
//!
//! Run with: `contactsync <command>`
//!
//! Results are written to stdout for the operator; diagnostics go through
//! `tracing` to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("discover") => commands::discover::run().await,
        Some("check") => commands::check::run().await,
        Some("auth") => commands::auth::run().await,
        Some("refresh-token") => commands::refresh::run(commands::refresh::wants_save(&args)).await,
        Some("help" | "--help" | "-h") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown command"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contactsync=info"));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_help() {
    println!("ContactSync");
    println!();
    println!("USAGE:");
    println!("    contactsync <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    discover              List custom and system Fibery entity types");
    println!("    check                 Test the Fibery and HubSpot connections");
    println!("    auth                  Authorize the HubSpot app and store the tokens");
    println!("    refresh-token [--save]  Refresh the HubSpot access token");
    println!("    help                  Show this help message");
    println!();
    println!("Credentials are read from contactsync.toml / config.toml (or .json)");
    println!("and FIBERY_* / HUBSPOT_* environment variables, including a .env file.");
    println!("New tokens are only ever written to contactsync.toml (or .json).");
}
