/// CLI argument definitions via clap derive.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Placeholder for the input argument in usage lines.
pub const INPUT_PLACEHOLDER: &str = "<input_params.json>";

/// Switch moved ahead of the positionals before parsing.
const DEBUG_FLAG: &str = "--debug";

/// convert-params — flatten a CloudFormation parameters file for `ParameterOverrides`.
#[derive(Debug, Parser)]
#[command(
    name = "convert-params",
    about = "Convert a CloudFormation parameters file into a flat ParameterOverrides mapping",
    version
)]
pub struct ConvertArgs {
    /// CloudFormation parameters file: a JSON array of ParameterKey/ParameterValue records.
    #[arg(value_name = "INPUT_PARAMS_JSON", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Where to write the flat key/value JSON object.
    #[arg(value_name = "OUTPUT_PARAMS_JSON", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Print step timing and duplicate-key notes to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// create-template-config — wrap CloudFormation parameters for `TemplateConfiguration`.
#[derive(Debug, Parser)]
#[command(
    name = "create-template-config",
    about = "Convert a CloudFormation parameters file into a CodePipeline template configuration",
    version
)]
pub struct TemplateConfigArgs {
    /// CloudFormation parameters file: a JSON array of ParameterKey/ParameterValue records.
    #[arg(value_name = "INPUT_PARAMS_JSON", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Where to write the {"Parameters": {...}} document.
    #[arg(value_name = "OUTPUT_TEMPLATE_CONFIG_JSON", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Print step timing and duplicate-key notes to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Build the one-line usage message, e.g.
/// `Usage: convert-params <input_params.json> <output_params.json>`.
#[must_use]
pub fn usage_line(program: &str, output_placeholder: &str) -> String {
    format!("Usage: {program} {INPUT_PLACEHOLDER} {output_placeholder}")
}

/// Name the program was invoked as (`argv[0]`), falling back to `default`.
#[must_use]
pub fn program_name(default: &str) -> String {
    std::env::args().next().unwrap_or_else(|| default.to_owned())
}

/// Parse process arguments into `P`.
///
/// `--help` and `--version` are rendered by clap as usual. Any other parse
/// failure (wrong positional count, unknown flag) prints the usage line to
/// stdout and exits with code 1 before the filesystem is touched.
pub fn parse_or_usage<P: Parser>(output_placeholder: &str) -> P {
    match P::try_parse_from(hoist_debug_flag(std::env::args_os())) {
        Ok(args) => args,
        Err(err) if is_informational(err.kind()) => err.exit(),
        Err(_) => {
            let command = P::command();
            let program = program_name(command.get_name());
            println!("{}", usage_line(&program, output_placeholder));
            std::process::exit(1);
        }
    }
}

/// Move every `--debug` ahead of the positionals.
///
/// The positionals accept values starting with `-` (`-params.json`), and once
/// one has been taken clap reads every later token as a value. Hoisting keeps
/// `in.json out.json --debug` working. Tokens after a `--` are left alone.
#[must_use]
pub fn hoist_debug_flag<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut hoisted: Vec<OsString> = args.next().into_iter().collect();
    let mut rest = Vec::new();
    let mut escaped = false;
    for arg in args {
        if !escaped && arg == DEBUG_FLAG {
            hoisted.push(arg);
        } else {
            escaped |= arg == "--";
            rest.push(arg);
        }
    }
    hoisted.extend(rest);
    hoisted
}

fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
