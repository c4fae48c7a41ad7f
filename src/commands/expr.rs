//! Expression commands - normalize, expand, flatten, merge, satisfies, lookup

use licmatch::core::expression::{self, MergeMode};
use licmatch::output::{
    ClausesResult, ExpressionResult, LicensesResult, LookupEntry, LookupResult, MergeResult,
    OutputMode, SatisfiesResult,
};

/// Print the canonical form of an expression
pub fn normalize(input: &str, mode: OutputMode) -> anyhow::Result<()> {
    ExpressionResult {
        input: input.to_string(),
        output: expression::normalize(input),
    }
    .render(mode);
    Ok(())
}

/// Print the DNF clauses of an expression
pub fn expand(input: &str, mode: OutputMode) -> anyhow::Result<()> {
    let clauses = expression::expand(input)
        .into_iter()
        .map(|clause| clause.into_iter().collect())
        .collect();
    ClausesResult {
        input: input.to_string(),
        clauses,
    }
    .render(mode);
    Ok(())
}

/// Print every license an expression mentions
pub fn flatten(input: &str, mode: OutputMode) -> anyhow::Result<()> {
    LicensesResult {
        input: input.to_string(),
        licenses: expression::flatten(input).into_iter().collect(),
    }
    .render(mode);
    Ok(())
}

/// Merge `proposed` into `base`
pub fn merge(proposed: &str, base: &str, merge_mode: MergeMode, mode: OutputMode) -> anyhow::Result<()> {
    MergeResult {
        proposed: proposed.to_string(),
        base: base.to_string(),
        mode: merge_mode.to_string(),
        result: expression::merge(Some(proposed), Some(base), merge_mode),
    }
    .render(mode);
    Ok(())
}

/// Check `input` against `constraint`
pub fn satisfies(input: &str, constraint: &str, mode: OutputMode) -> anyhow::Result<()> {
    SatisfiesResult {
        expression: input.to_string(),
        constraint: constraint.to_string(),
        satisfies: expression::satisfies(input, constraint),
    }
    .render(mode);
    Ok(())
}

/// Look up identifiers for full license names
pub fn lookup(names: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let names = names
        .iter()
        .map(|name| LookupEntry {
            name: name.clone(),
            identifier: expression::lookup_by_name(name).map(String::from),
        })
        .collect();
    LookupResult { names }.render(mode);
    Ok(())
}
