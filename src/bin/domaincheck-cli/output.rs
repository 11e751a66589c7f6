#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use domaincheck_lib::{DiagnosticReport, ErrorMode, RenderedError, Signal, ValidationOutcome};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct OutputRow {
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub outcome: ValidationOutcome,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rendered_error: Option<RenderedError>,
}

impl OutputRow {
    pub fn new(outcome: ValidationOutcome, mode: ErrorMode) -> Self {
        let rendered_error = outcome.render(mode);
        Self {
            outcome,
            rendered_error,
        }
    }
}

pub fn write_reports(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[OutputRow]) -> bool {
    rows.iter().any(|row| !row.outcome.valid)
}

fn write_human(rows: &[OutputRow]) -> Result<()> {
    for row in rows {
        let outcome = &row.outcome;
        match &row.rendered_error {
            None => println!("[OK]    {}", outcome.address),
            Some(rendered) => println!("[INVALID] {} :: {rendered}", outcome.address),
        }
        if let Some(domain) = outcome.suggestion() {
            println!("        did you mean: {}@{domain}", outcome.local_part);
        }
        if !outcome.syntax_reasons.is_empty() {
            println!("        syntax: {}", outcome.syntax_reasons.join("; "));
        }
        if outcome.valid && !outcome.warnings.is_empty() {
            println!("        warnings: {}", signal_codes(&outcome.signals()));
        }
        if !outcome.accepted_mx.is_empty() {
            println!("        mx: {}", mx_summary(outcome));
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    emit(cli, s.as_bytes())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let mut buf = Vec::new();
    for row in rows {
        let line = serde_json::to_string(row)?;
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
    }
    emit(cli, &buf)
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &OutputRow) -> Vec<String> {
    let outcome = &row.outcome;
    vec![
        outcome.address.clone(),
        outcome.local_part.clone(),
        outcome.domain.clone(),
        outcome.valid.to_string(),
        outcome.compact_key().unwrap_or("").to_string(),
        outcome.error.map(|e| e.code()).unwrap_or("").to_string(),
        outcome
            .warnings
            .keys()
            .map(|kind| kind.code())
            .collect::<Vec<_>>()
            .join("|"),
        outcome.suggestion().unwrap_or("").to_string(),
        mx_summary(outcome),
    ]
}

pub fn write_diagnostic(report: &DiagnosticReport, cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => {
            println!("email:     {}", report.email);
            println!("formatted: {}", report.formatted_email);
            println!("valid:     {}", report.valid);
            println!("errors:    {}", or_dash(signal_codes(&report.errors)));
            println!("warnings:  {}", or_dash(signal_codes(&report.warnings)));
            if !report.signup_errors.is_empty() {
                println!("signup:    {}", report.signup_errors.join("; "));
            }
            if !report.outcome.accepted_mx.is_empty() {
                println!("mx:        {}", mx_summary(&report.outcome));
            }
            Ok(())
        }
        "json" | "ndjson" => write_diagnostic_json(report, cli),
        other => bail!("format '{other}' not supported by diagnose, use: human|json|ndjson"),
    }
}

#[cfg(feature = "with-serde")]
fn write_diagnostic_json(report: &DiagnosticReport, cli: &Cli) -> Result<()> {
    let s = if cli.format == "json" {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    emit(cli, s.as_bytes())
}

#[cfg(not(feature = "with-serde"))]
fn write_diagnostic_json(_: &DiagnosticReport, cli: &Cli) -> Result<()> {
    bail!("format={} requires the 'with-serde' feature", cli.format)
}

pub fn write_typo(domain: &str, suggestion: Option<&str>, cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => {
            match suggestion {
                Some(canonical) => println!("{domain} -> {canonical}"),
                None => println!("{domain}: no suggestion"),
            }
            Ok(())
        }
        "json" | "ndjson" => write_typo_json(domain, suggestion, cli),
        other => bail!("format '{other}' not supported by typo, use: human|json|ndjson"),
    }
}

#[cfg(feature = "with-serde")]
fn write_typo_json(domain: &str, suggestion: Option<&str>, cli: &Cli) -> Result<()> {
    let value = serde_json::json!({ "domain": domain, "suggestion": suggestion });
    emit(cli, value.to_string().as_bytes())
}

#[cfg(not(feature = "with-serde"))]
fn write_typo_json(_: &str, _: Option<&str>, cli: &Cli) -> Result<()> {
    bail!("format={} requires the 'with-serde' feature", cli.format)
}

fn signal_codes(signals: &[Signal]) -> String {
    signals
        .iter()
        .map(|signal| signal.code)
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_dash(s: String) -> String {
    if s.is_empty() { "-".to_string() } else { s }
}

fn mx_summary(outcome: &ValidationOutcome) -> String {
    outcome
        .accepted_mx
        .iter()
        .map(|mx| format!("{}:{}", mx.preference, mx.exchange))
        .collect::<Vec<_>>()
        .join("|")
}

/// Stdout, or `--out` written atomically.
#[cfg(feature = "with-serde")]
fn emit(cli: &Cli, bytes: &[u8]) -> Result<()> {
    if let Some(path) = &cli.out {
        write_all_atomically(path, bytes)
    } else {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes)?;
        if !bytes.ends_with(b"\n") {
            stdout.write_all(b"\n")?;
        }
        Ok(())
    }
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
