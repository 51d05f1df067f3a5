//! Command-line argument parsing and help for lister.
//!
//! Short flags may be combined (`-lR`) and may appear anywhere before a `--`.
//! Everything that is not a flag is a path. With no paths, the current directory is listed.

use crate::core::Options;

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub options: Options,
    pub no_color: bool,
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List(CliArgs),
    Help,
    Version,
    Init,
    /// Unusable arguments, with the message to show.
    Invalid(String),
}

/// Parses the arguments following the program name.
///
/// Arguments stay `OsString`s so paths that are not valid UTF-8 reach the lister intact.
pub fn parse_args<I, S>(args: I) -> CliAction
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut parsed = CliArgs::default();
    let mut only_paths = false;

    for arg in args {
        let arg: OsString = arg.into();
        let bytes = arg.as_encoded_bytes();
        if only_paths || bytes == b"-" || !bytes.starts_with(b"-") {
            parsed.paths.push(PathBuf::from(arg));
            continue;
        }
        let Some(arg) = arg.to_str() else {
            return CliAction::Invalid(format!(
                "Unknown argument: {}",
                arg.to_string_lossy()
            ));
        };

        match arg {
            "--" => only_paths = true,
            "--help" => return CliAction::Help,
            "--version" => return CliAction::Version,
            "--init" => return CliAction::Init,
            "--no-color" => parsed.no_color = true,
            long if long.starts_with("--") => {
                return CliAction::Invalid(format!("Unknown argument: {}", long));
            }
            short => {
                for flag in short.chars().skip(1) {
                    match flag {
                        'R' => parsed.options.recursive = true,
                        'l' => parsed.options.long_format = true,
                        'a' => parsed.options.show_hidden = true,
                        'r' => parsed.options.reverse = true,
                        't' => parsed.options.sort_by_time = true,
                        other => {
                            return CliAction::Invalid(format!("Unknown flag: -{}", other));
                        }
                    }
                }
            }
        }
    }
    CliAction::List(parsed)
}

pub fn print_version() {
    println!("lister {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"lister - list directory contents

USAGE:
  lst [OPTIONS] [PATH]...

PATH:
  Directories or files to list (defaults to the current directory)

OPTIONS:
  -R                      List subdirectories recursively
  -l                      Use long listing format
  -a                      Show hidden entries (names starting with '.')
  -r                      Reverse the sort order
  -t                      Sort by modification time, oldest first
      --no-color          Disable colored output
      --init              Generate a default configuration file
      --help              Print help information
      --version           Display the current installed version of lister

ENVIRONMENT:
  LISTER_CONFIG           Override the default config path
  LISTER_LOG              Diagnostic log filter written to stderr (e.g. "debug")
"#
    );
}
