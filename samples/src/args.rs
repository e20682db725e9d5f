// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::settings::OutputFormat;

/// Used when `--config` is not given; its `base.yaml` is optional.
pub const DEFAULT_CONFIG_DIR: &str = "samples/configuration";

#[derive(clap::Parser)]
#[command(about = "Builds the sample message and prints it")]
pub struct Args {
    /// Directory containing `base.yaml`, which must exist when given
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the configured output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Args {
    /// Returns the configuration directory and whether its `base.yaml` is required.
    pub fn config_dir(&self) -> (&Path, bool) {
        match &self.config {
            Some(dir) => (dir, true),
            None => (Path::new(DEFAULT_CONFIG_DIR), false),
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["hello_world"]).unwrap();
        assert_eq!(args.config_dir(), (Path::new(DEFAULT_CONFIG_DIR), false));
        assert_eq!(args.format, None);
    }

    #[test]
    fn explicit_config_is_required() {
        let args = Args::try_parse_from(["hello_world", "--config", "/etc/samples"]).unwrap();
        assert_eq!(args.config_dir(), (Path::new("/etc/samples"), true));
    }

    #[test]
    fn format_override() {
        let args = Args::try_parse_from(["hello_world", "--format", "hex"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Hex));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["hello_world", "--format", "xml"]).is_err());
    }
}
