use clap::Parser;
use fileseal::cli::{logging, output, Cli, Commands};
use fileseal::FileSealError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Seal {
            ref file,
            ref output,
            ref mime,
            keep_name,
            force,
        } => fileseal::cli::commands::seal::execute(
            file,
            output.as_deref(),
            mime.as_deref(),
            keep_name,
            force,
        ),
        Commands::Open {
            ref container,
            ref output,
            force,
        } => fileseal::cli::commands::open::execute(container, output.as_deref(), force),
        Commands::Inspect { ref container } => {
            fileseal::cli::commands::inspect::execute(container)
        }
        Commands::Completions { shell } => fileseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        explain(&e);
        std::process::exit(1);
    }
}

/// Follow-up hint for the failures a user can act on.
fn explain(e: &FileSealError) {
    if e.is_not_a_container() {
        output::tip("This file is not a FileSeal container. Check you picked the right file.");
    } else if e.is_unsupported_version() {
        output::tip("The container was made by a newer FileSeal; upgrade to open it.");
    } else if e.is_wrong_password() {
        output::tip("Check the password and try again.");
    }
}
