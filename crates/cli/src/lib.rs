pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::simulate::SimulateOptions;

#[derive(Debug, Parser)]
#[command(
    name = "clearance",
    about = "Clearance pop-up operator CLI",
    long_about = "Inspect configuration, check catalog readiness, browse the clearance catalog, and replay popup decisions offline.",
    after_help = "Examples:\n  clearance doctor --json\n  clearance catalog --category office\n  clearance simulate --requests 50 --seed 7 --browsed electronics"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, catalog integrity, and clearance coverage")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List catalog items with derived urgency and clearance eligibility")]
    Catalog {
        #[arg(long, help = "Only list items in this category")]
        category: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Run the popup engine against the built-in catalog and summarise decisions")]
    Simulate {
        #[arg(long, default_value_t = 20, help = "Number of popup requests to replay")]
        requests: u32,
        #[arg(long, help = "Seed for reproducible runs (overrides engine.rng_seed)")]
        seed: Option<u64>,
        #[arg(long, default_value = "home", help = "Page the simulated shopper is on")]
        page: String,
        #[arg(long, help = "Target category for every request")]
        category: Option<String>,
        #[arg(long, num_args = 1.., help = "Categories in the shopper's browsing history")]
        browsed: Vec<String>,
        #[arg(long, num_args = 1.., help = "Categories in the shopper's purchase history")]
        purchased: Vec<String>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
        Command::Catalog { category, json } => commands::catalog::run(category.as_deref(), json),
        Command::Simulate { requests, seed, page, category, browsed, purchased } => {
            commands::simulate::run(SimulateOptions {
                requests,
                seed,
                page,
                category,
                browsed,
                purchased,
            })
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
