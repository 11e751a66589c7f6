mod args;
mod output;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use domaincheck_lib::{DomainValidator, MisspellingSeeds, MisspellingTable, find_typo};

use args::{Cli, Commands};
use output::OutputRow;

#[cfg(feature = "with-tracing")]
fn init_tracing(verbose: bool) {
    if !verbose {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("domaincheck_lib=debug")),
        )
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_tracing(verbose: bool) {
    if verbose {
        eprintln!("--verbose requires the 'with-tracing' feature");
    }
}

fn read_stdin_emails() -> Result<Vec<String>> {
    let mut emails = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        if !line.trim().is_empty() {
            emails.push(line);
        }
    }
    Ok(emails)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let emails = match &cli.cmd {
        Some(Commands::Typo { domain }) => {
            let table = MisspellingTable::build(MisspellingSeeds::default());
            let suggestion = find_typo(&table, domain);
            return output::write_typo(domain, suggestion.as_deref(), &cli);
        }
        Some(Commands::Diagnose { email }) => {
            let validator = DomainValidator::system(&cli.dns_options()?)
                .context("initialise DNS resolver")?;
            let report = validator.diagnose(email, &cli.banned_patterns()?);
            output::write_diagnostic(&report, &cli)?;
            if !report.valid {
                std::process::exit(2);
            }
            return Ok(());
        }
        Some(Commands::Check { emails }) => {
            let mut emails = emails.clone();
            if cli.stdin {
                emails.extend(read_stdin_emails()?);
            }
            emails
        }
        None if cli.stdin => read_stdin_emails()?,
        None => {
            Cli::clap_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let banned = cli.banned_patterns()?;
    let options = cli.validation_options();
    let validator =
        DomainValidator::system(&cli.dns_options()?).context("initialise DNS resolver")?;

    let rows: Vec<OutputRow> = emails
        .iter()
        .map(|email| OutputRow::new(validator.validate(email, &banned, &options), options.error_mode))
        .collect();

    output::write_reports(&rows, &cli)?;

    // exit codes: 0 all valid, 2 at least one invalid, 1 fatal
    if output::any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}
