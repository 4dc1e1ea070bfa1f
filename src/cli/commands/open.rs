//! `fileseal open` — decrypt a container and restore the original file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::files::{safe_file_name, write_output};
use crate::cli::{output, prompt_password};
use crate::container::{inspect, open_with, OpenOptions, Phase};
use crate::errors::Result;

/// Execute the `open` command.
pub fn execute(container: &str, output_path: Option<&str>, force: bool) -> Result<()> {
    let data = fs::read(container)?;

    // Reject non-containers before asking for a password.
    inspect(&data)?;
    let password = prompt_password()?;

    let opened = open_with(
        &data,
        &password,
        &OpenOptions::default(),
        &mut |p: Phase| output::phase(p),
    )?;

    let dest = resolve_destination(output_path, &opened.name)?;
    write_output(&dest, &opened.file_bytes, force)?;

    // Both strings come out of the container; keep escapes off the terminal.
    output::success(&format!(
        "Restored '{}' to {} ({}, {} bytes)",
        safe_file_name(&opened.name),
        dest.display(),
        opened.mime_type.escape_debug(),
        opened.file_bytes.len()
    ));

    Ok(())
}

/// Work out where the restored file goes.
///
/// - no `-o`: the recovered name in the current directory
/// - `-o <existing dir>`: the recovered name inside that directory
/// - `-o <path>`: exactly that path
fn resolve_destination(output_path: Option<&str>, recovered_name: &str) -> Result<PathBuf> {
    let file_name = safe_file_name(recovered_name);
    match output_path {
        None => Ok(std::env::current_dir()?.join(file_name)),
        Some(p) if Path::new(p).is_dir() => Ok(Path::new(p).join(file_name)),
        Some(p) => Ok(PathBuf::from(p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_file_path_is_used_verbatim() {
        let dest = resolve_destination(Some("/tmp/nowhere/out.bin"), "a.txt").unwrap();
        assert_eq!(dest, PathBuf::from("/tmp/nowhere/out.bin"));
    }

    #[test]
    fn directory_gets_sanitized_recovered_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let dest = resolve_destination(Some(dir), "../../evil.sh").unwrap();
        assert_eq!(dest, tmp.path().join("evil.sh"));
    }
}
