/// `convert-params`: flat `ParameterOverrides` mapping.
use crate::cli::ConvertArgs;
use crate::cli::OutputCtx;
use crate::cli::output::write_convert_summary;
use crate::params::ParamsError;

use super::{load_mapping, write_output};

/// Output placeholder shown in the usage line.
pub const OUTPUT_PLACEHOLDER: &str = "<output_params.json>";

/// Run `convert-params`.
///
/// # Errors
///
/// Returns `ParamsError` if the input cannot be loaded or the output cannot be written.
pub fn run(args: &ConvertArgs, ctx: &OutputCtx) -> Result<(), ParamsError> {
    let mapping = load_mapping(&args.input, ctx)?;

    let t_serialize = ctx.timer("serialize");
    let json = mapping.to_compact_json()?;
    drop(t_serialize);

    write_output(&args.output, &json, ctx)?;
    write_convert_summary(&args.output, &json)
}
