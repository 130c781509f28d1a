use ledger_report::{sample_transactions, write_report, TransactionReporter};

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Transaction type shown in the filtered section (case-insensitive)
    #[arg(long, default_value = "deposit")]
    category: String,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let transactions = sample_transactions();
    let reporter = TransactionReporter::new(&transactions);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "All transactions:")?;
    let written = write_report(reporter.generate_report(None), &mut out)
        .context("failed to print unfiltered report")?;
    info!(records = written, "Unfiltered report done");

    writeln!(out, "\nOnly {}:", args.category)?;
    let written = write_report(reporter.generate_report(Some(args.category.as_str())), &mut out)
        .with_context(|| format!("failed to print report for `{}`", args.category))?;
    info!(records = written, category = %args.category, "Filtered report done");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
