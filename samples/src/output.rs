// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use prost::Message;
use sampleprotos::samples::v1::SampleMessage;

use crate::settings::OutputFormat;

/// Renders the message the way `hello_world` prints it.
pub fn render(sample_message: &SampleMessage, format: OutputFormat) -> String {
    match format {
        OutputFormat::Debug => format!("{sample_message:?}"),
        OutputFormat::Hex => hex::encode(sample_message.encode_to_vec()),
    }
}
