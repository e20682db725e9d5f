// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use displaydoc::Display;
use tracing::{
    metadata::LevelFilter,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::{LogTracer, log::SetLoggerError};
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

const SERVICE_NAME: &str = "hello_world";

#[derive(Debug, thiserror::Error, Display)]
pub enum LoggingInitError {
    /// Log records are already forwarded to another logger
    LogTracer(#[from] SetLoggerError),
    /// Global tracing subscriber already set
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Logs go to stderr, stdout is reserved for the printed message.
pub fn init_logging() -> Result<(), LoggingInitError> {
    init_logging_with_writer(std::io::stderr)
}

/// Installs the global bunyan JSON subscriber writing to `make_writer`.
pub fn init_logging_with_writer<W>(make_writer: W) -> Result<(), LoggingInitError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let formatting_layer = BunyanFormattingLayer::new(SERVICE_NAME.into(), make_writer);
    let registry = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    LogTracer::init()?;
    set_global_default(registry)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // The only test in this crate that installs a global subscriber.
    #[test]
    fn bunyan_json_lines_and_single_init() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        init_logging_with_writer(move || writer.clone()).unwrap();

        tracing::error!(answer = 42, "logging initialized");

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let line = output
            .lines()
            .find(|line| line.contains("logging initialized"))
            .expect("log line written");
        assert!(line.contains("\"name\":\"hello_world\""), "{line}");
        assert!(line.contains("\"answer\":42"), "{line}");

        assert!(init_logging_with_writer(io::sink).is_err());
    }
}
