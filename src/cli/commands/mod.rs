//! One module per subcommand, each exposing `execute`.

pub mod completions;
pub mod inspect;
pub mod open;
pub mod seal;
