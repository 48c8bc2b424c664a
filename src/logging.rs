//! Plain-text logging for the `log` crate.
//!
//! The library itself only emits `log` events (table construction, updates,
//! transposes and render measurements). [`PlainLogger`] is a small `Log`
//! implementation for binaries that want to see them: one line per record
//! with an optional timestamp, level column and source location, written to
//! stderr or any other `Write + Send` sink.
//!
//! Optional tracing integration is available via `PlainTracingLayer` when
//! the `tracing` feature is enabled.
//!
//! ```rust,no_run
//! use log::LevelFilter;
//! use simple_table::logging::PlainLogger;
//!
//! PlainLogger::new()
//!     .level(LevelFilter::Debug)
//!     .show_path(false)
//!     .init()
//!     .expect("logger already installed");
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::{lock_recover, lock_recover_debug};

const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Line-oriented logger for the `log` crate.
///
/// # Thread Safety
///
/// The sink and the last printed timestamp are each behind a mutex with
/// poison recovery, so records from several threads never interleave
/// within a line.
pub struct PlainLogger {
    sink: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
    show_time: bool,
    omit_repeated_times: bool,
    show_level: bool,
    show_path: bool,
    time_format: OwnedFormatItem,
    last_time: Mutex<Option<String>>,
}

impl Default for PlainLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainLogger {
    /// Create a logger writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            sink: Mutex::new(Box::new(writer)),
            level: LevelFilter::Info,
            show_time: true,
            omit_repeated_times: true,
            show_level: true,
            show_path: true,
            time_format,
            last_time: Mutex::new(None),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Omit repeated timestamps.
    #[must_use]
    pub fn omit_repeated_times(mut self, omit: bool) -> Self {
        self.omit_repeated_times = omit;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the `file:line` suffix.
    #[must_use]
    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Override the time format (a `time` format description).
    ///
    /// An invalid description keeps the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails when a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            let time_str = self.format_time();
            if self.omit_repeated_times {
                let mut last = lock_recover(&self.last_time);
                if last.as_ref() == Some(&time_str) {
                    line.push_str(&" ".repeat(time_str.len()));
                } else {
                    line.push_str(&time_str);
                    *last = Some(time_str);
                }
            } else {
                line.push_str(&time_str);
            }
            line.push(' ');
        }

        if self.show_level {
            line.push_str(&format!("{:<8}", record.level()));
            line.push(' ');
        }

        line.push_str(&record.args().to_string());

        if self.show_path
            && let Some(path) = record.file()
        {
            line.push(' ');
            line.push_str(path);
            if let Some(line_no) = record.line() {
                line.push(':');
                line.push_str(&line_no.to_string());
            }
        }

        line
    }

    fn write_line(&self, line: &str) {
        let mut sink = lock_recover_debug(&self.sink, "PlainLogger::write_line");
        // A logger has nowhere to report its own write failures.
        let _ = writeln!(sink, "{line}");
    }
}

impl Log for PlainLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        self.write_line(&line);
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}

#[cfg(feature = "tracing")]
mod tracing_integration {
    use super::PlainLogger;
    use log::Level;
    use std::fmt::Debug;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level as TracingLevel, Subscriber};
    use tracing_subscriber::{Layer, layer::Context};

    /// Tracing layer that writes events through a `PlainLogger`.
    pub struct PlainTracingLayer {
        logger: PlainLogger,
    }

    impl PlainTracingLayer {
        /// Create a tracing layer backed by a stderr `PlainLogger`.
        #[must_use]
        pub fn new() -> Self {
            Self {
                logger: PlainLogger::new(),
            }
        }

        /// Use an existing logger configuration.
        #[must_use]
        pub fn with_logger(logger: PlainLogger) -> Self {
            Self { logger }
        }

        /// Install as the global tracing subscriber.
        ///
        /// # Errors
        ///
        /// Fails when a global subscriber is already installed.
        pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
            use tracing_subscriber::prelude::*;

            let subscriber = tracing_subscriber::registry().with(self);
            tracing::subscriber::set_global_default(subscriber)
        }
    }

    impl Default for PlainTracingLayer {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Collects an event's message and `key=value` fields into one line.
    #[derive(Default)]
    struct EventVisitor {
        message: String,
        fields: Vec<String>,
    }

    impl EventVisitor {
        fn into_message(self) -> String {
            let mut parts = Vec::with_capacity(self.fields.len() + 1);
            if !self.message.is_empty() {
                parts.push(self.message);
            }
            parts.extend(self.fields);
            parts.join(" ")
        }
    }

    impl Visit for EventVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            let rendered = format!("{value:?}");
            let rendered = strip_quotes(&rendered);
            if field.name() == "message" {
                self.message = rendered.to_string();
            } else {
                self.fields.push(format!("{}={rendered}", field.name()));
            }
        }
    }

    impl<S> Layer<S> for PlainTracingLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let level = map_tracing_level(*metadata.level());
            if level > self.logger.level {
                return;
            }

            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            let message = visitor.into_message();

            let line = self.logger.format_record(
                &log::Record::builder()
                    .args(format_args!("{message}"))
                    .level(level)
                    .target(metadata.target())
                    .file(metadata.file())
                    .line(metadata.line())
                    .module_path(metadata.module_path())
                    .build(),
            );
            self.logger.write_line(&line);
        }
    }

    fn map_tracing_level(level: TracingLevel) -> Level {
        match level {
            TracingLevel::TRACE => Level::Trace,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::INFO => Level::Info,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::ERROR => Level::Error,
        }
    }

    fn strip_quotes(value: &str) -> &str {
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

}

#[cfg(feature = "tracing")]
pub use tracing_integration::PlainTracingLayer;
