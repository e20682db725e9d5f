// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const ENV_PREFIX: &str = "SAMPLES";
const ENV_SEPARATOR: &str = "__";

/// Configuration for the `hello_world` binary.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
}

/// How the sample message is printed.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    /// Printed after the message
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            greeting: default_greeting(),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rust debug representation of the message
    #[default]
    Debug,
    /// Hex-encoded protobuf wire bytes
    Hex,
}

fn default_greeting() -> String {
    "Hello World".to_owned()
}

impl Settings {
    /// Replaces the configured output format if `format` is given.
    pub fn override_format(&mut self, format: Option<OutputFormat>) {
        if let Some(format) = format {
            self.output.format = format;
        }
    }
}

/// Loads the settings from `<dir>/base.yaml` overridden by `SAMPLES__*` environment variables.
///
/// A missing `base.yaml` is an error only if `required` is set.
pub fn get_configuration(dir: impl AsRef<Path>, required: bool) -> Result<Settings, ConfigError> {
    get_configuration_with_environment(dir, required, environment())
}

fn get_configuration_with_environment(
    dir: impl AsRef<Path>,
    required: bool,
    environment: Environment,
) -> Result<Settings, ConfigError> {
    let base = dir.as_ref().join("base.yaml");
    Config::builder()
        .add_source(File::from(base).required(required))
        .add_source(environment)
        .build()?
        .try_deserialize()
}

pub fn get_configuration_from_str(base: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(base, FileFormat::Yaml))
        .build()?
        .try_deserialize()
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
}
