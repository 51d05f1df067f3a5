//! main.rs
//! Entry point for lister

use lister::config::Config;
use lister::core::Lister;
use lister::utils::cli::{CliAction, parse_args, print_help, print_version};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use std::io::{self, BufWriter};
use std::process::ExitCode;

/// Exit status when at least one path or entry could not be listed.
const EXIT_PARTIAL: u8 = 1;
/// Exit status for unusable command line arguments.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays the listing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_env("LISTER_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let args = match parse_args(std::env::args_os().skip(1)) {
        CliAction::List(args) => args,
        CliAction::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        CliAction::Version => {
            print_version();
            return ExitCode::SUCCESS;
        }
        CliAction::Init => {
            let path = Config::default_path();
            return match Config::generate_default(&path) {
                Ok(()) => {
                    println!("Default config generated at {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
        CliAction::Invalid(msg) => {
            eprintln!("{}", msg);
            eprintln!("Try --help for available options");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let config = Config::load();
    let options = args.options.union(config.general().options());
    let palette = config.display().palette(args.no_color);

    let stdout = io::stdout();
    let mut lister = Lister::new(BufWriter::new(stdout.lock()), options, palette);

    match lister.run(&args.paths) {
        Ok(()) if lister.error_count() == 0 => ExitCode::SUCCESS,
        Ok(()) => ExitCode::from(EXIT_PARTIAL),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lst: write error: {}", e);
            ExitCode::FAILURE
        }
    }
}
