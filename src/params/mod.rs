/// Parameter domain layer: records, flattening, template configuration.
pub mod errors;
pub mod mapping;
pub mod record;
pub mod template;

pub use errors::ParamsError;
pub use mapping::{DuplicateKey, ParameterMapping, duplicate_keys};
pub use record::{ParameterRecord, load_records, parse_records};
pub use template::TemplateConfiguration;
