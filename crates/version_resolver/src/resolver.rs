// crates/version_resolver/src/resolver.rs

use crate::command::{execute, CommandRunner, ShellRunner, GIT_SHA_COMMAND, SHORT_SHA_COMMAND};
use crate::error::CommandError;
use crate::naming::{compose_info, derive_print_name};
use crate::options::{Defaults, Options};
use crate::output_file::{expand_output_file, FileDescriptor};

/// Everything a build tool needs to stamp the version into its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub if_meta: bool,
    pub if_log: bool,
    pub if_global: bool,
    pub if_export: bool,
    pub file_list: Vec<FileDescriptor>,
    /// `None` when no command ran and no version was given or defaulted.
    pub print_version: Option<String>,
    pub print_name: String,
    pub print_info: String,
}

impl ResolvedConfig {
    /// The resolved version, or `""` when there is none.
    pub fn version_text(&self) -> &str {
        self.print_version.as_deref().unwrap_or_default()
    }
}

/// Picks the command that produces the version, if any.
///
/// An explicit command wins, then the short SHA shortcut, then the full SHA one.
pub fn select_command(options: &Options) -> Option<String> {
    if let Some(command) = &options.command {
        return Some(command.clone());
    }
    if options.if_short_sha.unwrap_or(false) {
        Some(SHORT_SHA_COMMAND.to_string())
    } else if options.if_git_sha.unwrap_or(false) {
        Some(GIT_SHA_COMMAND.to_string())
    } else {
        None
    }
}

/// Resolves `options` against `defaults`, running any version command through the shell.
///
/// # Errors
///
/// Returns the [`CommandError`] of the version command unchanged when it
/// cannot be spawned or exits unsuccessfully.
pub fn resolve_options(options: Options, defaults: Defaults) -> Result<ResolvedConfig, CommandError> {
    resolve_options_with(&ShellRunner, options, defaults)
}

/// Same as [`resolve_options`] but runs the version command with `runner`.
pub fn resolve_options_with<R: CommandRunner + ?Sized>(
    runner: &R,
    options: Options,
    defaults: Defaults,
) -> Result<ResolvedConfig, CommandError> {
    // An empty command selects nothing, and still shadows the SHA shortcuts.
    let final_command = select_command(&options).filter(|command| !command.is_empty());
    let options = options.normalize(defaults);

    let print_version = match final_command {
        Some(command) => Some(execute(runner, &command)?),
        None => options.version,
    };

    let print_name = derive_print_name(options.name.as_deref());
    let print_info = compose_info(&print_name, print_version.as_deref());
    let file_list = expand_output_file(options.output_file.as_ref(), print_version.as_deref());
    log::debug!("resolved {} ({} output file(s))", print_info, file_list.len());

    Ok(ResolvedConfig {
        if_meta: options.if_meta,
        if_log: options.if_log,
        if_global: options.if_global,
        if_export: options.if_export,
        file_list,
        print_version,
        print_name,
        print_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output_file::OutputFile;
    use std::cell::RefCell;
    use std::io;

    /// Records every command and answers with a fixed stdout.
    struct RecordingRunner {
        stdout: String,
        seen: RefCell<Vec<String>>,
    }

    impl RecordingRunner {
        fn new(stdout: &str) -> Self {
            Self {
                stdout: stdout.to_string(),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str) -> Result<String, CommandError> {
            self.seen.borrow_mut().push(command.to_string());
            Ok(self.stdout.clone())
        }
    }

    struct BrokenRunner;

    impl CommandRunner for BrokenRunner {
        fn run(&self, command: &str) -> Result<String, CommandError> {
            Err(CommandError::Spawn {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no shell"),
            })
        }
    }

    #[test]
    fn test_plain_version_spawns_nothing() {
        let runner = RecordingRunner::new("ignored\n");
        let cfg = resolve_options_with(
            &runner,
            Options::new().name("app").version("1.2.3"),
            Defaults::default(),
        )
        .unwrap();
        assert_eq!(cfg.print_version.as_deref(), Some("1.2.3"));
        assert_eq!(cfg.print_info, "APP_VERSION: 1.2.3");
        assert!(runner.seen().is_empty());
    }

    #[test]
    fn test_command_beats_git_shortcuts() {
        let runner = RecordingRunner::new("1.0.0\n");
        let cfg = resolve_options_with(
            &runner,
            Options::new().command("echo 1.0.0").git_sha(true).short_sha(true),
            Defaults::default(),
        )
        .unwrap();
        assert_eq!(cfg.print_version.as_deref(), Some("1.0.0"));
        assert_eq!(runner.seen(), vec!["echo 1.0.0".to_string()]);
    }

    #[test]
    fn test_empty_command_falls_back_to_version() {
        let runner = RecordingRunner::new("abc1234\n");
        let cfg = resolve_options_with(
            &runner,
            Options::new().version("1.2.3").command("").short_sha(true),
            Defaults::default(),
        )
        .unwrap();
        assert_eq!(cfg.print_version.as_deref(), Some("1.2.3"));
        assert!(runner.seen().is_empty());
    }

    #[test]
    fn test_short_sha_beats_full_sha() {
        let options = Options::new().git_sha(true).short_sha(true);
        assert_eq!(select_command(&options).as_deref(), Some(SHORT_SHA_COMMAND));
    }

    #[test]
    fn test_full_sha_shortcut() {
        let options = Options::new().git_sha(true);
        assert_eq!(select_command(&options).as_deref(), Some(GIT_SHA_COMMAND));
    }

    #[test]
    fn test_shortcut_beats_explicit_version() {
        let runner = RecordingRunner::new("abc1234\n");
        let cfg = resolve_options_with(
            &runner,
            Options::new().version("1.2.3").short_sha(true),
            Defaults::default(),
        )
        .unwrap();
        assert_eq!(cfg.print_version.as_deref(), Some("abc1234"));
        assert_eq!(runner.seen(), vec![SHORT_SHA_COMMAND.to_string()]);
    }

    #[test]
    fn test_default_version_used_last() {
        let runner = RecordingRunner::new("");
        let defaults = Defaults::new(Some("pkg".into()), Some("0.4.0".into()));
        let cfg = resolve_options_with(&runner, Options::new(), defaults).unwrap();
        assert_eq!(cfg.print_version.as_deref(), Some("0.4.0"));
        assert_eq!(cfg.print_name, "PKG_VERSION");
    }

    #[test]
    fn test_nothing_resolves_without_error() {
        let runner = RecordingRunner::new("");
        let cfg = resolve_options_with(&runner, Options::new(), Defaults::default()).unwrap();
        assert_eq!(cfg.print_version, None);
        assert_eq!(cfg.print_name, "undefined_VERSION");
        assert_eq!(cfg.print_info, "undefined_VERSION: undefined");
        assert_eq!(cfg.version_text(), "");
    }

    #[test]
    fn test_output_file_sees_command_output() {
        let runner = RecordingRunner::new("1.2.3\n");
        let cfg = resolve_options_with(
            &runner,
            Options::new().command("cat VERSION").output_file(true),
            Defaults::default(),
        )
        .unwrap();
        assert_eq!(cfg.file_list, vec![FileDescriptor::new(".well-known/version", "1.2.3")]);
    }

    #[test]
    fn test_generator_receives_version() {
        let runner = RecordingRunner::new("");
        let cfg = resolve_options_with(
            &runner,
            Options::new()
                .version("3.1.4")
                .output_file(OutputFile::generator(|v| FileDescriptor::new("dist/v.txt", v).into())),
            Defaults::default(),
        )
        .unwrap();
        assert_eq!(cfg.file_list, vec![FileDescriptor::new("dist/v.txt", "3.1.4")]);
    }

    #[test]
    fn test_flags_are_passed_through() {
        let runner = RecordingRunner::new("");
        let cfg = resolve_options_with(&runner, Options::new(), Defaults::default()).unwrap();
        assert!(cfg.if_meta && cfg.if_log && cfg.if_global);
        assert!(!cfg.if_export);
        assert!(cfg.file_list.is_empty());
    }

    #[test]
    fn test_runner_error_propagates_unchanged() {
        let err = resolve_options_with(
            &BrokenRunner,
            Options::new().command("version-tool"),
            Defaults::default(),
        )
        .unwrap_err();
        match err {
            CommandError::Spawn { command, source } => {
                assert_eq!(command, "version-tool");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Spawn, got {:?}", other),
        }
    }
}
