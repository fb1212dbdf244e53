//! Console Logger
//!
//! A `tracing` layer that formats events as single lines and hands them to a
//! [`LogWriter`]. In the browser the default writer is the devtools console.

use std::fmt::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Destination for formatted log lines
pub trait LogWriter: Send + Sync + 'static {
    fn write(&self, level: Level, line: &str);
}

/// Writes to `console.error/warn/info/log/debug` on wasm, stderr elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl LogWriter for BrowserConsole {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: Level, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            Level::DEBUG => web_sys::console::log_1(&value),
            Level::TRACE => web_sys::console::debug_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: Level, line: &str) {
        eprintln!("{line}");
    }
}

/// Layer that renders every event through a [`LogWriter`]
pub struct ConsoleLayer<W> {
    writer: W,
}

impl<W: LogWriter> ConsoleLayer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: LogWriter,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let timestamp = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, meta.level(), meta.target(), &fields);
        self.writer.write(*meta.level(), &line);
    }
}

/// Collects the `message` field and any structured key/value pairs
#[derive(Default)]
struct FieldCollector {
    message: String,
    pairs: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.pairs.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.pairs.push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

fn format_line(timestamp: &str, level: &Level, target: &str, fields: &FieldCollector) -> String {
    let mut line = format!("{timestamp} {level:>5} {target}: {}", fields.message);
    for (key, value) in &fields.pairs {
        let _ = write!(line, " {key}={value}");
    }
    line
}

/// Install the console layer as the global default subscriber.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(level: Level) {
    let layer = ConsoleLayer::new(BrowserConsole).with_filter(LevelFilter::from_level(level));
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct VecWriter(Arc<Mutex<Vec<(Level, String)>>>);

    impl LogWriter for VecWriter {
        fn write(&self, level: Level, line: &str) {
            self.0.lock().unwrap().push((level, line.to_string()));
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
        let writer = VecWriter::default();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(writer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        let lines = writer.0.lock().unwrap().clone();
        lines
    }

    #[test]
    fn test_formats_message_and_fields() {
        let lines = capture(|| {
            tracing::info!(target: "api", path = "/auth/login", status = 401, "request failed");
        });

        assert_eq!(lines.len(), 1);
        let (level, line) = &lines[0];
        assert_eq!(*level, Level::INFO);
        assert!(line.contains(" INFO api: request failed"));
        assert!(line.contains("path=/auth/login"));
        assert!(line.contains("status=401"));
    }

    #[test]
    fn test_levels_are_forwarded() {
        let lines = capture(|| {
            tracing::error!("boom");
            tracing::warn!("careful");
            tracing::debug!("details");
        });

        let levels: Vec<Level> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![Level::ERROR, Level::WARN, Level::DEBUG]);
    }

    #[test]
    fn test_level_filter_drops_lower_levels() {
        let writer = VecWriter::default();
        let layer = ConsoleLayer::new(writer.clone()).with_filter(LevelFilter::from_level(Level::WARN));
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hidden");
            tracing::warn!("shown");
        });

        let lines = writer.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.ends_with("shown"));
    }
}
