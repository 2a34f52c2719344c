//! Output formatting for CI/CD integration

use crate::diff::Classification;
use crate::infra::FileSystem;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the GitHub Actions step output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// JSON output structure for CI/CD tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// False if a contract exceeds its size limit and checking is enabled
    pub success: bool,
    /// Report heading
    pub heading: String,
    /// Rendered markdown report
    pub report: String,
    /// Contract names per classification
    pub contracts: Classification,
    /// Contracts in the new report with a negative field
    pub exceeded: Vec<String>,
}

impl JsonOutput {
    /// Create a new JSON output
    pub fn new(heading: &str, report: &str, classification: Classification) -> Self {
        Self {
            success: true,
            heading: heading.to_string(),
            report: report.to_string(),
            contracts: classification,
            exceeded: Vec::new(),
        }
    }

    /// Record contracts over their limits; fails the output when `enforce` is set
    pub fn with_exceeded(mut self, exceeded: &[&str], enforce: bool) -> Self {
        self.exceeded = exceeded.iter().map(|s| s.to_string()).collect();
        self.success = !(enforce && !exceeded.is_empty());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
    }
}

/// Writer for GitHub Actions step outputs
///
/// Values are appended with the multi-line `name<<DELIMITER` syntax so
/// markdown reports survive intact.
pub struct GithubOutput<FS: FileSystem> {
    fs: FS,
    path: PathBuf,
}

impl<FS: FileSystem> GithubOutput<FS> {
    /// Write outputs to an explicit file
    pub fn new(fs: FS, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Write outputs to the file named by `GITHUB_OUTPUT`
    pub fn from_env(fs: FS) -> Result<Self> {
        let path = std::env::var_os(GITHUB_OUTPUT_ENV).with_context(|| {
            format!(
                "{} is not set; --github-output only works inside GitHub Actions",
                GITHUB_OUTPUT_ENV
            )
        })?;
        Ok(Self::new(fs, path))
    }

    /// Append one named output
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        // A value containing the delimiter would end the output early
        if name.contains(&delimiter) || value.contains(&delimiter) {
            anyhow::bail!("Output '{}' contains its own delimiter", name);
        }

        let entry = format!("{name}<<{delimiter}\n{value}\n{delimiter}\n");
        self.fs
            .append(&self.path, entry)
            .with_context(|| format!("Failed to write output to {}", self.path.display()))?;

        log::info!("Set output '{}' in {}", name, self.path.display());
        Ok(())
    }
}
