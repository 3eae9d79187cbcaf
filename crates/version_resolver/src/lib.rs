// crates/version_resolver/src/lib.rs

//! Resolves the build-time version mark of a project.
//!
//! The entry point is [`resolve_options`]: it applies defaults to an
//! [`Options`] value, picks the version source (explicit command, git SHA
//! shortcut, or plain version), runs the command if one was selected, and
//! projects the result into a [`ResolvedConfig`] holding the constant name,
//! the info line and the list of files a build tool should write.
//!
//! Nothing in this crate touches the environment or the filesystem. Fallback
//! name/version values come in through [`Defaults`].

mod command;
mod error;
mod naming;
mod options;
mod output_file;
mod resolver;

pub use command::{
    execute, strip_first_newline, CommandRunner, ShellRunner, GIT_SHA_COMMAND, SHORT_SHA_COMMAND,
};
pub use error::CommandError;
pub use naming::{compose_info, derive_print_name, UNDEFINED};
pub use options::{Defaults, Options};
pub use output_file::{
    expand_output_file, FileDescriptor, OutputFile, OutputFileGenerator, OutputFiles,
    DEFAULT_VERSION_PATH,
};
pub use resolver::{resolve_options, resolve_options_with, select_command, ResolvedConfig};
