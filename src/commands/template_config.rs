/// `create-template-config`: `{"Parameters": {...}}` for `TemplateConfiguration`.
use crate::cli::OutputCtx;
use crate::cli::TemplateConfigArgs;
use crate::cli::output::write_template_summary;
use crate::params::{ParamsError, TemplateConfiguration};

use super::{load_mapping, write_output};

/// Output placeholder shown in the usage line.
pub const OUTPUT_PLACEHOLDER: &str = "<output_template_config.json>";

/// Run `create-template-config`.
///
/// # Errors
///
/// Returns `ParamsError` if the input cannot be loaded or the output cannot be written.
pub fn run(args: &TemplateConfigArgs, ctx: &OutputCtx) -> Result<(), ParamsError> {
    let config = TemplateConfiguration::from(load_mapping(&args.input, ctx)?);

    let t_serialize = ctx.timer("serialize");
    let json = config.to_pretty_json()?;
    drop(t_serialize);

    write_output(&args.output, &json, ctx)?;
    write_template_summary(&args.output)
}
