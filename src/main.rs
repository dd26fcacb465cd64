// SPDX-License-Identifier: MPL-2.0
use filter_lens::app::{self, Flags, HELP};
use filter_lens::i18n::I18n;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status for an invalid command line.
const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::debug!("Invalid command line: {}", err);
            eprintln!("{}", err.notification().render_line(&I18n::default()));
            eprint!("\n{HELP}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Run failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
