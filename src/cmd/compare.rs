//! Compare command implementation
//!
//! Handles the `contract-size-diff compare` command which diffs two size
//! reports and renders the result as a markdown comment body.

use anyhow::{Context, Result};
use console::style;
use std::io;
use std::path::{Path, PathBuf};

use crate::cicd::{exceeded_contracts, find_violations, GithubOutput, JsonOutput};
use crate::config::{validate_heading, ConfigFile, ConfigLoader};
use crate::diff::{classify, snapshot_diff, Classification};
use crate::error::SizeDiffError;
use crate::fmt::{CHART, CHECKMARK, CROSSMARK};
use crate::infra::{FileSystem, RealFileSystem};
use crate::markdown::{comment_marker, format_diff_md};
use crate::report::{ReportError, ReportLoader, Snapshot};

/// Command-line switches for `compare`; unset values fall back to the config file
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Report heading
    pub heading: Option<String>,
    /// Fail when a contract exceeds its size limit
    pub check: bool,
    /// Print a JSON summary instead of markdown
    pub json: bool,
    /// Append the hidden comment marker
    pub marker: bool,
    /// Also write the markdown report to this file
    pub output: Option<PathBuf>,
    /// Set the `report` step output for GitHub Actions
    pub github_output: bool,
}

/// Settings after merging the config file and command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Report heading
    pub heading: String,
    /// Fail on exceeded limits
    pub check: bool,
    /// Append comment marker
    pub marker: bool,
}

impl ResolvedSettings {
    /// Command-line values win over config values
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved heading is empty or spans several lines.
    pub fn resolve(config: &ConfigFile, options: &CompareOptions) -> Result<Self> {
        let heading = options
            .heading
            .clone()
            .unwrap_or_else(|| config.heading.clone());
        validate_heading(&heading).context("Invalid --heading")?;

        Ok(Self {
            heading,
            check: options.check || config.check,
            marker: options.marker || config.marker,
        })
    }
}

/// Result of comparing two reports
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Rendered markdown
    pub report: String,
    /// Contract names per classification
    pub classification: Classification,
    /// Contracts in the new report over their limits
    pub exceeded: Vec<String>,
    /// New report, kept for violation details
    pub after: Snapshot,
}

/// Compare two size reports and print the markdown diff
///
/// # Examples
///
/// ```no_run
/// use contract_size_diff::cmd::compare::{cmd_compare, CompareOptions};
///
/// let options = CompareOptions {
///     heading: Some("Contract sizes".to_string()),
///     check: true,
///     ..Default::default()
/// };
/// cmd_compare("base-sizes.json", "sizes.json", &options)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either report doesn't exist or is malformed
/// - `--check` is set and a contract exceeds its size limit
/// - An output file cannot be written
pub fn cmd_compare(before: &str, after: &str, options: &CompareOptions) -> Result<()> {
    let config = ConfigLoader::load(Path::new("."))?;
    let settings = ResolvedSettings::resolve(&config, options)?;
    log::debug!("Resolved settings: {:?}", settings);

    let comparison = compare_reports(
        Path::new(before),
        Path::new(after),
        &settings,
        &RealFileSystem,
    )?;

    if options.json {
        let output = JsonOutput::new(
            &settings.heading,
            &comparison.report,
            comparison.classification.clone(),
        )
        .with_exceeded(
            &comparison
                .exceeded
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            settings.check,
        );
        println!("{}", output.to_json()?);
    } else {
        println!("{}", comparison.report);
    }

    if let Some(path) = &options.output {
        write_report(path, &comparison.report, &RealFileSystem)?;
    }

    if options.github_output {
        GithubOutput::from_env(RealFileSystem)?.set("report", &comparison.report)?;
    }

    enforce_budget(&comparison, settings.check)
}

/// Load, diff and render two reports
pub fn compare_reports<FS: FileSystem>(
    before: &Path,
    after: &Path,
    settings: &ResolvedSettings,
    fs: &FS,
) -> Result<Comparison> {
    let loader = ReportLoader::new(fs);
    let before_snapshot = load_report(&loader, before, "Baseline")?;
    let after_snapshot = load_report(&loader, after, "Comparison")?;

    let diff = snapshot_diff(&before_snapshot, &after_snapshot);
    let mut report = format_diff_md(&settings.heading, &diff);
    if settings.marker {
        report.push('\n');
        report.push_str(&comment_marker(&settings.heading));
    }
    log::debug!("Report:\n{}", report);

    let exceeded = exceeded_contracts(&after_snapshot)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Comparison {
        report,
        classification: classify(&before_snapshot, &after_snapshot),
        exceeded,
        after: after_snapshot,
    })
}

fn load_report<FS: FileSystem>(
    loader: &ReportLoader<FS>,
    path: &Path,
    role: &'static str,
) -> Result<Snapshot, SizeDiffError> {
    loader.load(path).map_err(|source| match source {
        ReportError::Io { source: ref io_err, .. } if io_err.kind() == io::ErrorKind::NotFound => {
            SizeDiffError::ReportNotFound {
                role,
                path: path.to_path_buf(),
            }
        }
        source => SizeDiffError::InvalidReport {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_report<FS: FileSystem>(path: &Path, report: &str, fs: &FS) -> Result<()> {
    fs.write(path, format!("{}\n", report))
        .map_err(|source| SizeDiffError::Io {
            context: format!("writing report to {}", path.display()),
            source,
        })
        .context("Failed to save report")?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}

fn enforce_budget(comparison: &Comparison, check: bool) -> Result<()> {
    if comparison.exceeded.is_empty() {
        if check {
            eprintln!(
                "{} {}",
                CHECKMARK,
                style("All contracts are within their size limits").green()
            );
        }
        return Ok(());
    }

    if !check {
        log::warn!(
            "{} contract(s) exceed their size limit: {}",
            comparison.exceeded.len(),
            comparison.exceeded.join(", ")
        );
        return Ok(());
    }

    eprintln!(
        "\n{} {}",
        CROSSMARK,
        style("Size limit exceeded").red().bold()
    );
    for violation in find_violations(&comparison.after) {
        violation.print();
    }
    eprintln!(
        "{} {} changed, {} added, {} removed",
        CHART,
        comparison.classification.changed.len(),
        comparison.classification.added.len(),
        comparison.classification.removed.len()
    );

    Err(SizeDiffError::BudgetExceeded {
        contracts: comparison.exceeded.clone(),
    }
    .into())
}
