mod commands;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::insurance::HlvArgs;
use commands::investments::{LumpSumArgs, SipArgs};
use commands::loans::{AmortizationArgs, EmiArgs, PrincipalArgs};

/// Loan, investment and life-cover calculations
#[derive(Parser)]
#[command(
    name = "finplan",
    version,
    about = "Loan, investment and life-cover calculations",
    long_about = "A CLI for retail financial planning calculations with decimal \
                  precision. Supports EMI and its inverse, amortization schedules, \
                  SIP and lump-sum projections, and Human Life Value estimates."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the equated monthly instalment for a loan
    Emi(EmiArgs),
    /// Recover the loan principal behind a known EMI
    PrincipalFromEmi(PrincipalArgs),
    /// Build a month-by-month repayment schedule
    Amortization(AmortizationArgs),
    /// Project a monthly SIP
    Sip(SipArgs),
    /// Project a one-time investment
    LumpSum(LumpSumArgs),
    /// Estimate Human Life Value (life cover needed)
    Hlv(HlvArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loans::run_emi(args),
        Commands::PrincipalFromEmi(args) => commands::loans::run_principal_from_emi(args),
        Commands::Amortization(args) => commands::loans::run_amortization(args),
        Commands::Sip(args) => commands::investments::run_sip(args),
        Commands::LumpSum(args) => commands::investments::run_lump_sum(args),
        Commands::Hlv(args) => commands::insurance::run_hlv(args),
        Commands::Version => {
            println!("finplan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
