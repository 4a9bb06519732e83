/// The `{"Parameters": {...}}` document read by CodePipeline's
/// `TemplateConfiguration` input.
use serde::Serialize;

use super::errors::ParamsError;
use super::mapping::ParameterMapping;

/// Template configuration wrapper. `Parameters` is the only modeled field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateConfiguration {
    pub parameters: ParameterMapping,
}

impl TemplateConfiguration {
    /// Indented JSON (2 spaces), no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError::Serialize` if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<ParameterMapping> for TemplateConfiguration {
    fn from(parameters: ParameterMapping) -> Self {
        Self { parameters }
    }
}
