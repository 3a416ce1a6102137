//! Multi-level subcommand dispatch.
//!
//! A root [`Command`] owns a [`CommandRegistry`] of subcommands, each with
//! its own flag schema and possibly its own registry. Parsing consumes the
//! first positional token as the subcommand name, looks it up by exact
//! match, and parses the remaining tokens against that subcommand's schema.
//!
//! ```
//! use multi_level_argparse::{CommandBuilder, Flag, FlagType};
//!
//! let mut root = CommandBuilder::new("tool").build();
//! root.add_command(
//!     CommandBuilder::new("add")
//!         .flag(Flag::new("x").value_type(FlagType::Int).required())
//!         .run(|_| Ok(()))
//!         .build(),
//! )
//! .unwrap();
//!
//! let ctx = root.parse(&["add", "--x", "5"]).unwrap();
//! assert_eq!(ctx.command(), "add");
//! assert_eq!(ctx.int("x"), Some(5));
//! ```

pub mod cmd;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod flag;
mod parser;
pub mod registry;
mod usage;

pub use command::{Command, CommandBuilder};
pub use context::Context;
pub use error::{Error, Result};
pub use flag::{Arg, Flag, FlagType, FlagValue};
pub use registry::CommandRegistry;

pub const PROGRAM: &str = "multi-level-argparse";

pub fn build_cli() -> Result<Command> {
    let mut root = CommandBuilder::new(PROGRAM)
        .short("Multi-level argparse")
        .long("Multi-level subcommand dispatch: each command has its own flags")
        .epilog(
            "Based on Chase Seibert's blog post, \
             https://chase-seibert.github.io/blog/2014/03/21/python-multilevel-argparse.html",
        )
        // Global flags
        .flag(
            Flag::new("verbose")
                .short('v')
                .usage("Enable verbose output")
                .global(),
        )
        .build();

    cmd::register_commands(&mut root)?;

    Ok(root)
}
