mod cli;
mod dump;
mod error;
mod fetch;
mod store;

pub use cli::parse_args;
pub use cli::CliArgs;
pub use dump::{dump_filename, run, DumpKind, NATION_DUMP_URL, REGION_DUMP_URL};
pub use error::{DumpError, DumpResult};
