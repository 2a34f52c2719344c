//! Report fixtures shared by integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Baseline report with four contracts
pub const BEFORE_REPORT: &str = r#"{
  "ACLManager": {
    "runtime_size": 3493,
    "init_size": 4108,
    "runtime_margin": 21083,
    "init_margin": 45044
  },
  "ATokenInstance": {
    "runtime_size": 10162,
    "init_size": 11059,
    "runtime_margin": 14414,
    "init_margin": 38093
  },
  "BTokenInstance": {
    "runtime_size": 10162,
    "init_size": 11059,
    "runtime_margin": 14414,
    "init_margin": 38093
  },
  "CTokenInstance": {
    "runtime_size": 10162,
    "init_size": 11059,
    "runtime_margin": 14414,
    "init_margin": 38093
  }
}"#;

/// New report: ACLManager changed, BTokenInstance removed, DTokenInstance added
pub const AFTER_REPORT: &str = r#"{
  "ACLManager": {
    "runtime_size": 3493,
    "init_size": 4001,
    "runtime_margin": 21086,
    "init_margin": 45044
  },
  "ATokenInstance": {
    "runtime_size": 10162,
    "init_size": 11059,
    "runtime_margin": 14414,
    "init_margin": 38093
  },
  "CTokenInstance": {
    "runtime_size": 10162,
    "init_size": 11059,
    "runtime_margin": 14414,
    "init_margin": 38093
  },
  "DTokenInstance": {
    "runtime_size": 10162,
    "init_size": 11059,
    "runtime_margin": 14414,
    "init_margin": 38093
  }
}"#;

/// New report where one contract is over the runtime size limit
pub const OVER_LIMIT_REPORT: &str = r#"{
  "ACLManager": {
    "runtime_size": 3493,
    "init_size": 4108,
    "runtime_margin": 21083,
    "init_margin": 45044
  },
  "Pool": {
    "runtime_size": 25000,
    "init_size": 26000,
    "runtime_margin": -424,
    "init_margin": 23152
  }
}"#;

/// Expected markdown for BEFORE_REPORT -> AFTER_REPORT with heading "Abcdef"
pub const EXPECTED_MARKDOWN: &str = "### ♻️ Abcdef
| Contract | Runtime Size (B) | Initcode Size (B) | Runtime Margin (B) | Initcode Margin (B) |
| :--- | ---: | ---: | ---: | ---: |
| ~ACLManager | 3,493 | <sup>↓3% (-107)</sup> 4,001 | <sup>↑0% (+3)</sup> 21,086 | 45,044 |
| -BTokenInstance | 10,162 | 11,059 | 14,414 | 38,093 |
| +DTokenInstance | 10,162 | 11,059 | 14,414 | 38,093 |

<details><summary>🔕 Unchanged</summary>

| Contract | Runtime Size (B) | Initcode Size (B) | Runtime Margin (B) | Initcode Margin (B) |
| :--- | ---: | ---: | ---: | ---: |
| ATokenInstance | 10,162 | 11,059 | 14,414 | 38,093 |
| CTokenInstance | 10,162 | 11,059 | 14,414 | 38,093 |
</details>";

/// Write a report into `dir` and return its path
pub fn write_report(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write report fixture");
    path
}
