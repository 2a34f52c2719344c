//! Completions command implementation
//!
//! Handles the `contract-size-diff completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Binary name used in generated scripts
pub const BIN_NAME: &str = "contract-size-diff";

/// Generate a shell completion script for `cmd`
///
/// # Examples
///
/// ```bash
/// # Bash
/// contract-size-diff completions bash > /etc/bash_completion.d/contract-size-diff
///
/// # Zsh
/// contract-size-diff completions zsh > ~/.zfunc/_contract-size-diff
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    generate(shell, cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn command() -> Command {
        Command::new(BIN_NAME)
            .subcommand(
                Command::new("compare")
                    .arg(Arg::new("before").required(true))
                    .arg(Arg::new("after").required(true)),
            )
            .subcommand(Command::new("completions"))
    }

    #[test]
    fn test_cmd_completions_generates_script_for_each_shell() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut out = Vec::new();
            cmd_completions(shell, &mut command(), &mut out);

            let script = String::from_utf8(out).unwrap();
            assert!(script.contains(BIN_NAME), "{shell} script lacks binary name");
            assert!(script.contains("compare"), "{shell} script lacks subcommand");
        }
    }
}
