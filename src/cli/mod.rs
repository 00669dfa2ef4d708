//! Command line interface: `doc` renders Markdown documents, `upload` pushes
//! endpoint schemas to the api catalog.

mod commands;

pub use commands::{run_cli, Cli, Commands};
