#![deny(clippy::all, clippy::pedantic)]
//! create-template-config — wrap CloudFormation parameters for `TemplateConfiguration`.

use cfn_params::cli::{OutputCtx, TemplateConfigArgs, parse_or_usage, write_error};
use cfn_params::commands::template_config;

fn main() {
    let args: TemplateConfigArgs = parse_or_usage(template_config::OUTPUT_PLACEHOLDER);
    let ctx = OutputCtx::new(args.debug);

    if let Err(err) = template_config::run(&args, &ctx) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
