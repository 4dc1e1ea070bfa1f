//! `fileseal inspect` — show the plaintext header of a container.

use std::fs;

use crate::cli::output;
use crate::container::inspect;
use crate::errors::Result;

/// Execute the `inspect` command.
pub fn execute(container: &str) -> Result<()> {
    let data = fs::read(container)?;
    let info = inspect(&data)?;

    output::print_container_info(&info);
    output::tip("Name, type and content are encrypted; `fileseal open` needs the password.");

    Ok(())
}
