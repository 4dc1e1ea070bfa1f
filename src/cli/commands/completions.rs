//! `fileseal completions` — print a shell completion script.
//!
//! Usage:
//!   fileseal completions bash > ~/.bash_completion.d/fileseal
//!   fileseal completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_script(shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Render the completion script for `shell` into `out`.
fn write_script(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Commands;

    #[test]
    fn bash_script_covers_subcommands() {
        let mut buf = Vec::new();
        write_script(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("fileseal"));
        for sub in ["seal", "open", "inspect"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }

    #[test]
    fn shell_names_parse_case_insensitively() {
        let cli = Cli::try_parse_from(["fileseal", "completions", "ZSH"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
    }

    #[test]
    fn unknown_shell_is_a_usage_error() {
        assert!(Cli::try_parse_from(["fileseal", "completions", "csh"]).is_err());
    }
}
