#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! cfn-params — reshape CloudFormation parameter files for CodePipeline.
//!
//! Input is the `[{"ParameterKey": ..., "ParameterValue": ...}]` array that
//! CloudFormation uses for stack parameters. Two shapes are produced from it:
//!
//! - a flat `{"Key": "Value"}` mapping for `ParameterOverrides`
//!   ([`commands::convert`]), and
//! - `{"Parameters": {...}}` for `TemplateConfiguration`
//!   ([`commands::template_config`]).

pub mod cli;
pub mod commands;
pub mod params;
