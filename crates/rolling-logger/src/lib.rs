//! Rolling Logger
//!
//! `tracing-subscriber` setup for the app: a formatted console sink plus a
//! layer that keeps the most recent events in a circular buffer. Records
//! from the `log` macros are bridged into `tracing`, so both end up in the
//! same places.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

static BUFFER: OnceLock<Arc<RingBuffer>> = OnceLock::new();

/// Fixed-size buffer of formatted lines; the oldest line is dropped when full
pub struct RingBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Layer that writes every event it sees into a [`RingBuffer`]
pub struct RingBufferLayer {
    app_name: String,
    buffer: Arc<RingBuffer>,
}

impl RingBufferLayer {
    pub fn new(app_name: &str, buffer: Arc<RingBuffer>) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer,
        }
    }
}

/// Collects the message and extra fields of one event.
/// Events bridged from `log` carry their origin in `log.*` fields.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
    log_target: Option<String>,
}

impl LineVisitor {
    fn field(&mut self, field: &Field, value: std::fmt::Arguments<'_>) {
        match field.name() {
            "message" => {
                let _ = self.message.write_fmt(value);
            }
            "log.target" => self.log_target = Some(value.to_string()),
            name if name.starts_with("log.") => {}
            name => {
                let _ = write!(self.fields, " {}={}", name, value);
            }
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.field(field, format_args!("{}", value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.field(field, format_args!("{:?}", value));
    }
}

impl<S: Subscriber> Layer<S> for RingBufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let target = visitor.log_target.as_deref().unwrap_or(metadata.target());
        let line = format!(
            "[{}] [{}] {:<5} {}: {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            metadata.level().as_str(),
            target,
            visitor.message,
            visitor.fields
        );
        self.buffer.push(line);
    }
}

/// `log` level names map onto the `tracing` ones
pub fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

#[cfg(target_arch = "wasm32")]
fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // no system clock on wasm32-unknown-unknown
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleWriter)
}

#[cfg(not(target_arch = "wasm32"))]
fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Sends each formatted event to the `console` method of its level
    pub struct ConsoleWriter;

    pub struct ConsoleLine {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleLine {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleLine {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let value = wasm_bindgen::JsValue::from_str(text.trim_end());
            if self.level == Level::ERROR {
                web_sys::console::error_1(&value);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&value);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&value);
            } else {
                web_sys::console::debug_1(&value);
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleWriter {
        type Writer = ConsoleLine;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleLine { level: Level::INFO, buf: Vec::new() }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleLine { level: *meta.level(), buf: Vec::new() }
        }
    }
}

/// Install the global subscriber: level gate, console sink and ring buffer.
/// Also routes the `log` macros into it.
pub fn init_logger(app_name: &str, level: log::LevelFilter, capacity: usize) -> Result<(), String> {
    let buffer = Arc::new(RingBuffer::new(capacity));
    tracing_subscriber::registry()
        .with(level_filter(level))
        .with(console_layer())
        .with(RingBufferLayer::new(app_name, Arc::clone(&buffer)))
        .try_init()
        .map_err(|e| format!("Failed to set logger: {}", e))?;
    let _ = BUFFER.set(buffer);
    Ok(())
}

/// Recent lines of the installed logger
pub fn recent() -> Vec<String> {
    BUFFER.get().map(|buffer| buffer.lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(level: LevelFilter, capacity: usize, emit: impl FnOnce()) -> Vec<String> {
        let buffer = Arc::new(RingBuffer::new(capacity));
        let subscriber = tracing_subscriber::registry()
            .with(level)
            .with(RingBufferLayer::new("Test", Arc::clone(&buffer)));
        tracing::subscriber::with_default(subscriber, emit);
        buffer.lines()
    }

    #[test]
    fn test_buffer_keeps_most_recent() {
        let lines = capture(LevelFilter::TRACE, 2, || {
            tracing::info!(target: "store", "one");
            tracing::info!(target: "store", "two");
            tracing::warn!(target: "store", "three");
        });

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("store: two"));
        assert!(lines[1].contains("WARN  store: three"));
    }

    #[test]
    fn test_level_gate_and_fields() {
        let lines = capture(LevelFilter::WARN, 10, || {
            tracing::debug!("hidden");
            tracing::error!(task = 3, "drop failed");
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[Test] ERROR"));
        assert!(lines[0].ends_with("drop failed task=3"));
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(log::LevelFilter::Warn), LevelFilter::WARN);
        assert_eq!(level_filter(log::LevelFilter::Off), LevelFilter::OFF);
    }
}
