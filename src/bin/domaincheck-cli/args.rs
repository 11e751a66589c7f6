use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use domaincheck_lib::{
    BannedEntry, BannedPatterns, DnsOptions, ErrorMode, Nameservers, ResolverFailurePolicy,
    ValidationOptions,
};

#[derive(Parser)]
#[command(name = "domaincheck-cli", version, about = "Email domain reputation checks")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read addresses from stdin (one per line)
    #[arg(long, global = true)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV per --format)
    #[arg(long, global = true)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, global = true, default_value = "human")]
    pub format: String,

    /// list every signal instead of a single error key
    #[arg(long, global = true)]
    pub extended: bool,

    /// skip the provider misspelling check
    #[arg(long = "no-typo", global = true)]
    pub no_typo: bool,

    /// skip domain classification and DNS
    #[arg(long = "no-dns", global = true)]
    pub no_dns: bool,

    /// per-attempt DNS timeout (ms)
    #[arg(long = "timeout-ms", global = true, default_value_t = 3_000)]
    pub timeout_ms: u64,

    /// DNS tries per query, first try included
    #[arg(long, global = true, default_value_t = 2)]
    pub attempts: usize,

    /// nameservers: system|google|cloudflare|quad9
    #[arg(long, global = true, default_value = "system")]
    pub nameservers: String,

    /// report resolver failures as resolver_unavailable instead of no_dns_record
    #[arg(long = "distinct-resolver-errors", global = true)]
    pub distinct_resolver_errors: bool,

    /// banned pattern, `*` as wildcard (repeatable)
    #[arg(long = "banned", global = true)]
    pub banned: Vec<String>,

    /// file of banned patterns: `pattern [reason]` per line, `#` comments
    #[arg(long = "banned-file", global = true)]
    pub banned_file: Option<PathBuf>,

    /// debug logs on stderr (feature `with-tracing`)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// validate addresses
    Check { emails: Vec<String> },
    /// full report for one address, every check enabled
    Diagnose { email: String },
    /// suggest the intended provider domain
    Typo { domain: String },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn error_mode(&self) -> ErrorMode {
        if self.extended {
            ErrorMode::Extended
        } else {
            ErrorMode::Compact
        }
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions::new()
            .with_error_mode(self.error_mode())
            .with_typo_check(!self.no_typo)
            .with_dns_validation(!self.no_dns)
    }

    pub fn dns_options(&self) -> Result<DnsOptions> {
        let policy = if self.distinct_resolver_errors {
            ResolverFailurePolicy::Distinct
        } else {
            ResolverFailurePolicy::TreatAsMissing
        };
        Ok(DnsOptions {
            timeout_ms: self.timeout_ms,
            ..DnsOptions::default()
        }
        .with_attempts(self.attempts)
        .with_nameservers(nameservers_from_str(&self.nameservers)?)
        .with_failure_policy(policy))
    }

    pub fn banned_patterns(&self) -> Result<BannedPatterns> {
        let mut entries: Vec<BannedEntry> = self.banned.iter().map(BannedEntry::new).collect();
        if let Some(path) = &self.banned_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read banned patterns from {}", path.display()))?;
            entries.extend(parse_banned_lines(&text));
        }
        BannedPatterns::new(entries).context("invalid banned pattern")
    }
}

pub fn nameservers_from_str(s: &str) -> Result<Nameservers> {
    match s {
        "system" => Ok(Nameservers::System),
        "google" => Ok(Nameservers::Google),
        "cloudflare" => Ok(Nameservers::Cloudflare),
        "quad9" => Ok(Nameservers::Quad9),
        other => bail!("unknown --nameservers '{other}', use: system|google|cloudflare|quad9"),
    }
}

fn parse_banned_lines(text: &str) -> impl Iterator<Item = BannedEntry> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(char::is_whitespace) {
            Some((pattern, reason)) => BannedEntry::new(pattern).with_reason(reason.trim()),
            None => BannedEntry::new(line),
        })
}
