//! CLI command implementations, one module per subcommand.

pub mod add;
pub mod delete;
pub mod list;
pub mod profile;
