//! Command-line arguments.
//!
//! Parsed by hand: every flag accepts both `--flag value` and
//! `--flag=value`, and anything not starting with `-` is a value to convert.

use numscan::{
    try_real, Allow, CheckKind, CheckOptions, Number, Options, Selector, Selectors, Target,
};

/// What to do with each value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Convert,
    Check,
    Query,
}

/// Policy for values that fail to convert (`--on-fail`).
#[derive(Clone, Debug, PartialEq)]
pub enum OnFail {
    Raise,
    Input,
    Constant(Number),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::struct_excessive_bools, reason = "independent flags")]
pub struct CliArgs {
    pub target: Target,
    pub base: Option<u32>,
    pub separators: bool,
    pub coerce: bool,
    pub on_fail: OnFail,
    pub allow_inf: bool,
    pub allow_nan: bool,
    pub mode: Mode,
    pub help: bool,
    pub values: Vec<String>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            target: Target::Real,
            base: None,
            separators: false,
            coerce: false,
            on_fail: OnFail::Raise,
            allow_inf: true,
            allow_nan: true,
            mode: Mode::Convert,
            help: false,
            values: Vec::new(),
        }
    }
}

impl CliArgs {
    pub fn options(&self) -> Options {
        let options = Options::default()
            .with_allow_separators(self.separators)
            .with_coerce_int_like_float(self.coerce)
            .with_allow_inf(self.allow_inf)
            .with_allow_nan(self.allow_nan);
        match self.base {
            Some(base) => options.with_base(base),
            None => options,
        }
    }

    pub fn selectors(&self) -> Selectors {
        let on_fail = match &self.on_fail {
            OnFail::Raise => Selector::Raise,
            OnFail::Input => Selector::UseInput,
            OnFail::Constant(number) => Selector::Constant(number.clone()),
        };
        Selectors::default().with_on_fail(on_fail)
    }

    /// `forceint` has no check of its own; it checks as `intlike`.
    pub fn check_kind(&self) -> CheckKind {
        match self.target {
            Target::Real => CheckKind::Real,
            Target::Float => CheckKind::Float,
            Target::Int => CheckKind::Int,
            Target::IntLike | Target::ForceInt => CheckKind::IntLike,
        }
    }

    pub fn check_options(&self) -> CheckOptions {
        let allow = |allowed| if allowed { Allow::Allowed } else { Allow::Disallowed };
        CheckOptions::default()
            .with_inf(allow(self.allow_inf))
            .with_nan(allow(self.allow_nan))
            .with_allow_separators(self.separators)
            .with_base(self.base.unwrap_or(10))
    }
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
            _ => (arg, None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            if let Some(value) = inline {
                return Ok(value.to_string());
            }
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{name} needs a value"))
        };
        match flag {
            "-h" | "--help" => cli.help = true,
            "--target" => cli.target = parse_target(&value("--target")?)?,
            "--base" => cli.base = Some(parse_base(&value("--base")?)?),
            "--on-fail" => cli.on_fail = parse_on_fail(&value("--on-fail")?)?,
            "--separators" => cli.separators = true,
            "--coerce" => cli.coerce = true,
            "--no-inf" => cli.allow_inf = false,
            "--no-nan" => cli.allow_nan = false,
            "--check" => cli.mode = Mode::Check,
            "--query" => cli.mode = Mode::Query,
            "--" => {
                cli.values.extend(args[i + 1..].iter().cloned());
                break;
            }
            _ if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ => cli.values.push(arg.to_string()),
        }
        i += 1;
    }
    Ok(cli)
}

fn parse_target(name: &str) -> Result<Target, String> {
    match name {
        "real" => Ok(Target::Real),
        "float" => Ok(Target::Float),
        "int" => Ok(Target::Int),
        "intlike" => Ok(Target::IntLike),
        "forceint" => Ok(Target::ForceInt),
        _ => Err(format!(
            "unknown target '{name}', options: real, float, int, intlike, forceint"
        )),
    }
}

fn parse_base(text: &str) -> Result<u32, String> {
    text.parse()
        .map_err(|_| format!("invalid base '{text}'"))
}

fn parse_on_fail(text: &str) -> Result<OnFail, String> {
    match text {
        "raise" => Ok(OnFail::Raise),
        "input" => Ok(OnFail::Input),
        _ => try_real(text, &Options::default(), &Selectors::raising())
            .ok()
            .and_then(numscan::Value::into_number)
            .map(OnFail::Constant)
            .ok_or_else(|| format!("--on-fail expects raise, input or a number, not '{text}'")),
    }
}

#[cfg(test)]
mod tests;
