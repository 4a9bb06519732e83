/// Command bodies for the two binaries, plus the load and write steps they share.
pub mod convert;
pub mod template_config;

use std::fs;
use std::path::Path;

use crate::cli::OutputCtx;
use crate::params::{ParameterMapping, ParamsError, duplicate_keys, load_records};

/// Read `input` and flatten its records into a mapping.
///
/// Nothing is written until this succeeds, so a bad input file never leaves
/// a partial output behind.
///
/// # Errors
///
/// Returns an input-category `ParamsError` if the file is unreadable or malformed.
pub fn load_mapping(input: &Path, ctx: &OutputCtx) -> Result<ParameterMapping, ParamsError> {
    let t_load = ctx.timer("load_records");
    let records = load_records(input)?;
    drop(t_load);

    let _t_build = ctx.timer("build_mapping");
    ctx.note_duplicates(&duplicate_keys(&records));
    Ok(ParameterMapping::from_records(&records))
}

/// Create or truncate `output` and write `contents` to it.
///
/// # Errors
///
/// Returns `ParamsError::WriteOutput` if the file cannot be written.
pub fn write_output(output: &Path, contents: &str, ctx: &OutputCtx) -> Result<(), ParamsError> {
    let _t = ctx.timer("write_output");
    fs::write(output, contents).map_err(|source| ParamsError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mapping_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("params.json");
        fs::write(
            &input,
            r#"[{"ParameterKey":"Env","ParameterValue":"dev"},{"ParameterKey":"Env","ParameterValue":"prod"}]"#,
        )
        .unwrap();

        let mapping = load_mapping(&input, &OutputCtx::default()).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("Env"), Some("prod"));
    }

    #[test]
    fn test_write_output_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("out.json");
        let err = write_output(&output, "{}", &OutputCtx::default()).unwrap_err();
        assert!(matches!(err, ParamsError::WriteOutput { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
