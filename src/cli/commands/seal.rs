//! `fileseal seal` — encrypt a file into a container.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::files::{opaque_stem, write_output};
use crate::cli::{mime, output, prompt_new_password};
use crate::config::Settings;
use crate::container::{seal_with, Phase};
use crate::errors::{FileSealError, Result};

/// Execute the `seal` command.
pub fn execute(
    file: &str,
    output_path: Option<&str>,
    mime_type: Option<&str>,
    keep_name: bool,
    force: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let input = Path::new(file);

    // 1. Read the file and work out what to record about it.
    let plaintext = fs::read(input)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| FileSealError::CommandFailed(format!("'{file}' has no file name")))?;
    let mime_type = mime_type.unwrap_or_else(|| mime::guess(input));

    // 2. Decide where the container goes before asking for a password.
    let dest = match output_path {
        Some(p) => PathBuf::from(p),
        None => {
            let stem = if settings.opaque_names && !keep_name {
                opaque_stem()
            } else {
                name.clone()
            };
            settings.container_path(&cwd, &stem)
        }
    };
    if dest.exists() && !force {
        return Err(FileSealError::OutputExists(dest));
    }

    // 3. Password, then seal.
    let password = prompt_new_password(settings.min_password_len)?;
    let container = seal_with(
        &plaintext,
        &name,
        mime_type,
        &password,
        &settings.seal_options(),
        &mut |p: Phase| output::phase(p),
    )?;

    // 4. Write atomically.
    write_output(&dest, &container, force)?;

    output::success(&format!(
        "Sealed '{name}' into {} ({} bytes)",
        dest.display(),
        container.len()
    ));
    output::tip(&format!(
        "Run `fileseal open {}` to restore it.",
        dest.display()
    ));

    Ok(())
}
