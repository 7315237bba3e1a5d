//! Command handlers, one module per subcommand.

pub mod config_cmd;
pub mod generate;
pub mod scan;
pub mod util;
