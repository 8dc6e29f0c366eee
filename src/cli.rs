//! Command-line front end: argument definitions, prompts and report rendering.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use secrecy::SecretString;

use crate::evaluator::PolicyEngine;
use crate::report::{Report, Verdict};

/// pwd-policy - rule-based password strength checks
#[derive(Parser, Debug)]
#[command(
    name = "pwd-policy",
    version,
    about = "Rule-based password strength checks",
    long_about = "Check a password against length, character-class, context,\n\
                  common-password, sequence and repetition rules.\n\n\
                  Policy parameters are read from PWD_* environment variables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for a password and print the assessment
    Check {
        /// Username to check for leaks (prompted for when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the HTTP checker
    Serve {
        /// Bind address
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Bind port
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
}

/// Reads the password without echoing it.
pub fn prompt_password() -> io::Result<SecretString> {
    let password = rpassword::prompt_password("Enter the password to test: ")?;
    Ok(SecretString::new(password.into()))
}

/// Reads an optional username; an empty line means none.
pub fn prompt_username<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "Enter username (optional, press Enter to skip): ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let username = line.trim_end_matches(['\r', '\n']);

    Ok((!username.is_empty()).then(|| username.to_string()))
}

/// Human-readable assessment, as printed by `check`.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("\n--- Assessment ---\n");
    out.push_str(&report.verdict_message);
    out.push('\n');

    if report.verdict == Verdict::Weak {
        out.push_str("Reasons:\n");
        for item in &report.feedback {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "\nChecks Passed: {} / {}\n",
        report.passed_checks, report.total_checks
    ));

    match report.verdict {
        Verdict::Strong => out.push_str("Good job creating a strong password!\n"),
        Verdict::Weak => out.push_str("Please try creating a stronger password.\n"),
    }
    out
}

/// Writes the report to `out`: pretty JSON when `json` is set, otherwise the
/// human-readable assessment.
pub fn write_report<W: Write>(out: &mut W, report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        write!(out, "{}", render_report(report))?;
    }
    out.flush()?;
    Ok(())
}

/// Runs the interactive check. Returns the report so the caller can pick an
/// exit code.
///
/// Banner and prompts go to stderr; stdout carries only the report.
pub fn run_check(engine: &PolicyEngine, username: Option<String>, json: bool) -> anyhow::Result<Report> {
    let mut prompts = io::stderr();

    if !json {
        writeln!(prompts, "--- Password Strength Tester ---")?;
    }

    let password = prompt_password()?;
    let username = match username {
        Some(u) => Some(u),
        None => prompt_username(&mut io::stdin().lock(), &mut prompts)?,
    };

    let report = engine.evaluate(Some(&password), username.as_deref());
    write_report(&mut io::stdout().lock(), &report, json)?;

    Ok(report)
}
