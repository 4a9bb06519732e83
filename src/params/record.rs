/// Parameter records as exported by CloudFormation (`aws cloudformation describe-stacks`
/// style `Parameters` arrays) and loading them from disk.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::errors::ParamsError;

/// One `{ParameterKey, ParameterValue}` entry from the input file.
///
/// Other fields CloudFormation emits alongside (`UsePreviousValue`, `ResolvedValue`)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterRecord {
    /// Template parameter name.
    #[serde(rename = "ParameterKey")]
    pub key: String,
    /// Value supplied for the parameter.
    #[serde(rename = "ParameterValue")]
    pub value: String,
}

impl ParameterRecord {
    /// Construct a record from a key/value pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read `path` and parse it as a JSON array of parameter records.
///
/// # Errors
///
/// Returns `ParamsError::ReadInput` if the file cannot be read,
/// `ParamsError::ParseInput` if it is not a JSON array, and
/// `ParamsError::InvalidRecord` for the first record missing a required string field.
pub fn load_records(path: &Path) -> Result<Vec<ParameterRecord>, ParamsError> {
    let text = fs::read_to_string(path).map_err(|source| ParamsError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text, path)
}

/// Parse the text of a parameters file. `path` is only used for error context.
///
/// # Errors
///
/// See [`load_records`].
pub fn parse_records(text: &str, path: &Path) -> Result<Vec<ParameterRecord>, ParamsError> {
    let items: Vec<Value> =
        serde_json::from_str(text).map_err(|source| ParamsError::ParseInput {
            path: path.to_path_buf(),
            source,
        })?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| ParamsError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<ParameterRecord>, ParamsError> {
        parse_records(text, Path::new("params.json"))
    }

    #[test]
    fn test_parse_preserves_order() {
        let records = parse(
            r#"[{"ParameterKey":"Env","ParameterValue":"prod"},
                {"ParameterKey":"Region","ParameterValue":"us-east-1"}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                ParameterRecord::new("Env", "prod"),
                ParameterRecord::new("Region", "us-east-1"),
            ]
        );
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let records = parse(
            r#"[{"ParameterKey":"ImageId","ParameterValue":"/aws/ami","UsePreviousValue":false,"ResolvedValue":"ami-123"}]"#,
        )
        .unwrap();
        assert_eq!(records, vec![ParameterRecord::new("ImageId", "/aws/ami")]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse(r#"[{"ParameterKey":"Env""#).unwrap_err();
        assert!(matches!(err, ParamsError::ParseInput { .. }));
    }

    #[test]
    fn test_top_level_object_is_parse_error() {
        let err = parse(r#"{"Env":"prod"}"#).unwrap_err();
        assert!(matches!(err, ParamsError::ParseInput { .. }));
    }

    #[test]
    fn test_missing_value_reports_index() {
        let err = parse(
            r#"[{"ParameterKey":"Env","ParameterValue":"prod"},{"ParameterKey":"Region"}]"#,
        )
        .unwrap_err();
        match err {
            ParamsError::InvalidRecord { index, source, .. } => {
                assert_eq!(index, 1);
                assert!(source.to_string().contains("ParameterValue"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_string_value_is_invalid() {
        let err = parse(r#"[{"ParameterKey":"Port","ParameterValue":8080}]"#).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ParamsError::ReadInput { .. }));
    }
}
