//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod files;
pub mod logging;
pub mod mime;
pub mod output;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use zeroize::Zeroizing;

use crate::errors::{FileSealError, PolicyError, Result};

/// Environment variable consulted for the password before prompting.
pub const PASSWORD_ENV: &str = "FILESEAL_PASSWORD";

/// FileSeal CLI: password-sealed file containers.
#[derive(Parser)]
#[command(
    name = "fileseal",
    about = "Seal files into password-protected containers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logs on stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a file into a .fs container
    Seal {
        /// File to seal
        file: String,

        /// Output container path (default: random name in the current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// MIME type to record (guessed from the extension if omitted)
        #[arg(long)]
        mime: Option<String>,

        /// Name the container after the original file instead of a random name
        #[arg(long)]
        keep_name: bool,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt a container and restore the original file
    Open {
        /// Container to open
        container: String,

        /// Output file or directory (default: original name in the current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show the unencrypted header of a container
    Inspect {
        /// Container to inspect
        container: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the password for opening a container, trying in order:
/// 1. `FILESEAL_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| FileSealError::CommandFailed(format!("password prompt: {e}")))?;

    if pw.is_empty() {
        return Err(PolicyError::EmptyPassword.into());
    }
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new sealing password with confirmation.
///
/// Also respects `FILESEAL_PASSWORD`; in that case the length policy is
/// left to the sealer so scripted runs fail with the same error.
/// Interactive prompts re-ask until the password is long enough.
pub fn prompt_new_password(min_len: usize) -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose password")
            .with_confirmation("Confirm password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| FileSealError::CommandFailed(format!("password prompt: {e}")))?;

        if password.chars().count() < min_len {
            output::warning(&format!(
                "Password must be at least {min_len} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_seal_flags() {
        let cli = Cli::try_parse_from([
            "fileseal", "seal", "a.txt", "--mime", "text/plain", "--keep-name", "-f",
        ])
        .unwrap();
        match cli.command {
            Commands::Seal {
                file,
                mime,
                keep_name,
                force,
                output,
            } => {
                assert_eq!(file, "a.txt");
                assert_eq!(mime.as_deref(), Some("text/plain"));
                assert!(keep_name);
                assert!(force);
                assert!(output.is_none());
            }
            _ => panic!("expected seal"),
        }
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["fileseal", "inspect", "x.fs", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
