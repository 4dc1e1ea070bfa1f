//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::container::{ContainerInfo, Phase};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a progress phase on stderr so piped stdout is unaffected.
pub fn phase(phase: Phase) {
    eprintln!("{} {}", style("\u{2026}").dim(), style(phase).dim());
}

/// Print the plaintext header fields of a container.
pub fn print_container_info(info: &ContainerInfo) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    let payload = match info.payload_len() {
        Some(n) => format!("{n} bytes"),
        None => "truncated (no room for auth tag)".to_string(),
    };

    table.add_row(vec!["Format".to_string(), format!("FileSeal v{}", info.version)]);
    table.add_row(vec!["Salt".to_string(), hex::encode(info.salt)]);
    table.add_row(vec!["Nonce".to_string(), hex::encode(info.nonce)]);
    table.add_row(vec![
        "Ciphertext".to_string(),
        format!("{} bytes", info.ciphertext_len),
    ]);
    table.add_row(vec!["Encrypted payload".to_string(), payload]);

    println!("{table}");
}
