//! Match command - run the license matcher on two revision documents

use std::path::Path;

use anyhow::Context;

use licmatch::adapters::RevisionFile;
use licmatch::config::GlobalConfig;
use licmatch::core::services::LicenseMatcher;
use licmatch::output::{MatchReport, OutputMode};

/// Compare the revisions stored at `source` and `target`
pub fn match_revisions(
    source: &Path,
    target: &Path,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load(),
    };
    let matcher = LicenseMatcher::from_config(&config.matcher);
    log::debug!("matcher policies: {:?}", matcher.policy_names());

    let source = RevisionFile::new(source).load().context("cannot read source revision")?;
    let target = RevisionFile::new(target).load().context("cannot read target revision")?;

    MatchReport {
        source: source.definition.coordinates.to_string(),
        target: target.definition.coordinates.to_string(),
        verdict: matcher.process(&source, &target),
    }
    .render(mode);
    Ok(())
}
