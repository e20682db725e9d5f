// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sample protobuf message construction

pub mod args;
pub mod hello_lib;
pub mod logging;
pub mod output;
pub mod settings;
