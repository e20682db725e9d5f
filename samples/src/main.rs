// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Context;
use clap::Parser;
use samples::{
    args::Args, hello_lib::get_proto, logging::init_logging, output::render,
    settings::get_configuration,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let (config_dir, required) = args.config_dir();
    let mut settings = get_configuration(config_dir, required).with_context(|| {
        format!(
            "Could not load configuration from {}",
            config_dir.display()
        )
    })?;
    settings.override_format(args.format);

    let sample_message = get_proto();
    info!(
        name = %sample_message.name,
        format =? settings.output.format,
        "Printing sample message"
    );

    println!("{}", render(&sample_message, settings.output.format));
    println!("{}", settings.output.greeting);

    Ok(())
}
