//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{MatchItem, MismatchItem, ProcessResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A single expression rewritten (normalize, merge)
#[derive(Debug, Serialize)]
pub struct ExpressionResult {
    /// Expression as given
    pub input: String,
    /// Resulting expression, `None` when there is nothing to report
    pub output: Option<String>,
}

/// DNF clauses of an expression
#[derive(Debug, Serialize)]
pub struct ClausesResult {
    /// Expression as given
    pub input: String,
    /// OR'd clauses, each a list of AND'd licenses
    pub clauses: Vec<Vec<String>>,
}

/// Every license an expression mentions
#[derive(Debug, Serialize)]
pub struct LicensesResult {
    /// Expression as given
    pub input: String,
    /// Licenses, sorted
    pub licenses: Vec<String>,
}

/// Outcome of a merge
#[derive(Debug, Serialize)]
pub struct MergeResult {
    /// Proposed expression
    pub proposed: String,
    /// Base expression
    pub base: String,
    /// `OR` or `AND`
    pub mode: String,
    /// Merged expression
    pub result: Option<String>,
}

/// Outcome of a satisfies check
#[derive(Debug, Serialize)]
pub struct SatisfiesResult {
    /// Expression checked
    pub expression: String,
    /// Constraint it was checked against
    pub constraint: String,
    /// Whether the expression satisfies the constraint
    pub satisfies: bool,
}

/// Full-name lookups
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// One entry per name, in input order
    pub names: Vec<LookupEntry>,
}

/// One full-name lookup
#[derive(Debug, Serialize)]
pub struct LookupEntry {
    /// Name as given
    pub name: String,
    /// Identifier, if the name is known
    pub identifier: Option<String>,
}

/// Verdict of the license matcher on two revision documents
#[derive(Debug, Serialize)]
pub struct MatchReport {
    /// Source revision coordinates
    pub source: String,
    /// Target revision coordinates
    pub target: String,
    /// The verdict and its evidence
    #[serde(flatten)]
    pub verdict: ProcessResult,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl ExpressionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.output.as_deref().unwrap_or("null")),
            OutputMode::Json => print_json(self),
        }
    }
}

impl ClausesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for clause in &self.clauses {
                    println!("{}", clause.join(" AND "));
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl LicensesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for license in &self.licenses {
                    println!("{license}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl MergeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.result.as_deref().unwrap_or("null")),
            OutputMode::Json => print_json(self),
        }
    }
}

impl SatisfiesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.satisfies),
            OutputMode::Json => print_json(self),
        }
    }
}

impl LookupResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for entry in &self.names {
                    match &entry.identifier {
                        Some(id) => println!("{}: {id}", entry.name),
                        None => println!("{}: {}", entry.name, "unknown".dimmed()),
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl MatchReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} -> {}\n", self.source, self.target);

        match &self.verdict {
            ProcessResult::Matching(items) => {
                println!("{}", "MATCHING".green().bold());
                for item in items {
                    println!("  {}", describe_match(item));
                }
            },
            ProcessResult::NotMatching(items) if items.is_empty() => {
                println!("{}", "INCONCLUSIVE".yellow().bold());
                println!("  No comparable license evidence on either revision.");
            },
            ProcessResult::NotMatching(items) => {
                println!("{}", "NOT MATCHING".red().bold());
                for item in items {
                    println!("  {}", describe_mismatch(item));
                }
            },
        }
    }
}

fn location(policy: &str, file: Option<&str>, prop_path: &str) -> String {
    match file {
        Some(file) => format!("[{policy}] {file} {prop_path}"),
        None => format!("[{policy}] {prop_path}"),
    }
}

fn describe_match(item: &MatchItem) -> String {
    format!("{} = {}", location(&item.policy, item.file.as_deref(), &item.prop_path), item.value)
}

fn describe_mismatch(item: &MismatchItem) -> String {
    format!(
        "{}: {} != {}",
        location(&item.policy, item.file.as_deref(), &item.prop_path),
        item.source,
        item.target
    )
}
