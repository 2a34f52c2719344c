//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".contract-size-diff.toml";

/// Heading used when neither the config nor the command line sets one
pub const DEFAULT_HEADING: &str = "Contract sizes";

/// contract-size-diff configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Report heading
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Fail when a contract in the new report exceeds a size limit
    #[serde(default)]
    pub check: bool,

    /// Append a hidden comment marker to the report
    #[serde(default)]
    pub marker: bool,
}

fn default_heading() -> String {
    DEFAULT_HEADING.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            check: false,
            marker: false,
        }
    }
}

impl ConfigFile {
    /// Validate settings
    ///
    /// # Examples
    ///
    /// ```
    /// use contract_size_diff::config::ConfigFile;
    ///
    /// assert!(ConfigFile::default().validate().is_ok());
    ///
    /// let blank = ConfigFile { heading: "  ".to_string(), ..Default::default() };
    /// assert!(blank.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_heading(&self.heading)
    }
}

/// Reject headings that would break the `###` line or the comment marker
pub fn validate_heading(heading: &str) -> Result<()> {
    if heading.trim().is_empty() {
        anyhow::bail!("heading must not be empty");
    }
    if heading.contains(['\n', '\r']) {
        anyhow::bail!("heading must be a single line");
    }
    Ok(())
}
