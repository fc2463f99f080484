//! numscan command-line front end.
//!
//! Converts, checks or classifies each value given on the command line, or
//! each line of stdin when no values are given.

mod args;
mod run;

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Once;

use numscan::Converter;
use tracing::debug;

use args::{parse_args, CliArgs};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`, if set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: numscan [options] [VALUE...]");
    eprintln!();
    eprintln!("Reads values from stdin, one per line, when none are given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --target=<kind>     real, float, int, intlike, forceint (default: real)");
    eprintln!("  --base=<n>          Integer base, 2-36 or 0 to detect (int target only)");
    eprintln!("  --separators        Accept '_' digit separators");
    eprintln!("  --coerce            Return integers for integral floats (real target)");
    eprintln!("  --on-fail=<policy>  raise, input, or a number to substitute (default: raise)");
    eprintln!("  --no-inf            Reject infinity spellings");
    eprintln!("  --no-nan            Reject NaN spellings");
    eprintln!("  --check             Print whether each value converts");
    eprintln!("  --query             Print the kind of number each value converts to");
    eprintln!("  -h, --help          Show this message");
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("error: {msg}");
            print_usage();
            return ExitCode::from(2);
        }
    };
    if cli.help {
        print_usage();
        return ExitCode::SUCCESS;
    }
    debug!(target_kind = ?cli.target, mode = ?cli.mode, values = cli.values.len(), "starting");

    let mut converter = Converter::new(cli.options(), cli.selectors());
    let mut failed = false;
    if cli.values.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => failed |= !emit(&cli, &mut converter, &line),
                Err(err) => {
                    eprintln!("error: reading stdin: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for value in &cli.values {
            failed |= !emit(&cli, &mut converter, value);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print the result for one value. Returns `false` if it raised.
fn emit(cli: &CliArgs, converter: &mut Converter, value: &str) -> bool {
    match run::process(cli, converter, value) {
        Ok(line) => {
            println!("{line}");
            true
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            false
        }
    }
}
