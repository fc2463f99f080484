//! Per-value processing.

use numscan::{check, query_type, Converter, Input, NumberKind};

use crate::args::{CliArgs, Mode};

/// The output line for `value`, or the message of the error it raised.
pub fn process(cli: &CliArgs, converter: &mut Converter, value: &str) -> Result<String, String> {
    match cli.mode {
        Mode::Convert => converter
            .convert(value, cli.target)
            .map(|converted| converted.to_string())
            .map_err(|err| err.to_string()),
        Mode::Check => {
            let passes = check(Input::Str(value), cli.check_kind(), &cli.check_options());
            Ok(passes.to_string())
        }
        Mode::Query => Ok(match query_type(Input::Str(value), converter.options()) {
            Some(NumberKind::Int) => "int",
            Some(NumberKind::Float) => "float",
            None => "none",
        }
        .to_string()),
    }
}
