#![deny(clippy::all, clippy::pedantic)]
//! convert-params — flatten a CloudFormation parameters file for `ParameterOverrides`.

use cfn_params::cli::{ConvertArgs, OutputCtx, parse_or_usage, write_error};
use cfn_params::commands::convert;

fn main() {
    let args: ConvertArgs = parse_or_usage(convert::OUTPUT_PLACEHOLDER);
    let ctx = OutputCtx::new(args.debug);

    if let Err(err) = convert::run(&args, &ctx) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
