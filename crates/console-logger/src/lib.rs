//! Console Logger
//!
//! `tracing` subscriber for browser builds. Events are formatted by
//! `tracing-subscriber`'s fmt layer and each line is forwarded to the
//! matching `console.*` method.

mod buffer;

use std::io;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

pub use buffer::LineBuffer;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Most verbose level that is forwarded
    pub level: Level,
    /// Prefix each line with the event target (module path)
    pub with_target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to install console subscriber: {0}")]
    Install(String),
}

/// Install the console subscriber as the global default
///
/// Time stamps are off: `wasm32-unknown-unknown` has no system clock.
pub fn init(config: &LoggerConfig) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(config.with_target)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .map_err(|err| LoggerError::Install(err.to_string()))
}

/// Hands out one `ConsoleWriter` per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Writer bound to the level of the event being formatted
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: LineBuffer,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: LineBuffer::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in self.buffer.push(buf) {
            emit(self.level, &line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(rest) = self.buffer.take_rest() {
            emit(self.level, &rest);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

fn emit(level: Level, line: &str) {
    let message = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&message),
        Level::WARN => console::warn_1(&message),
        Level::INFO => console::info_1(&message),
        Level::DEBUG => console::debug_1(&message),
        _ => console::log_1(&message),
    }
}
