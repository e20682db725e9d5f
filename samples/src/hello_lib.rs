// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builds the sample message.

use chrono::{DateTime, TimeDelta, Utc};
use sampleprotos::samples::{
    convert::{to_duration, to_timestamp},
    v1::{SampleMessage, SubMessage},
};
use tracing::debug;

const SAMPLE_VALUE: f64 = 42.1984;

/// Generates a sample message stamped with the current time.
pub fn get_proto() -> SampleMessage {
    get_proto_at(Utc::now())
}

/// Generates a sample message stamped with `now`.
pub fn get_proto_at(now: DateTime<Utc>) -> SampleMessage {
    let mut sample_message = SampleMessage {
        name: "python".to_owned(),
        tags: vec!["foo".to_owned(), "bar".to_owned()],
        ..Default::default()
    };

    sample_message.subs.push(SubMessage {
        flag: true,
        value: SAMPLE_VALUE,
    });
    sample_message.subs.push(SubMessage {
        flag: false,
        value: -SAMPLE_VALUE,
    });

    sample_message.meta = Some(SubMessage {
        flag: true,
        value: SAMPLE_VALUE,
    });

    sample_message.time = Some(to_timestamp(now));
    sample_message.duration = Some(to_duration(TimeDelta::days(1)));

    debug!(%now, subs = sample_message.subs.len(), "Built sample message");
    sample_message
}
