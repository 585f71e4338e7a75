//! Console Logger
//!
//! `tracing` subscriber for the browser. Every formatted line goes to the
//! devtools console at a matching level and is kept in a bounded ring
//! buffer of recent lines.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Lines kept by [`init_logger`]
pub const DEFAULT_LOG_CAPACITY: usize = 200;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Ring buffer of the most recent log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, evicting the oldest when full
    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot joined into one block, oldest first
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Local wall-clock timestamps
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIME_FORMAT))
    }
}

/// Hands out one [`ConsoleWriter`] per event
#[derive(Clone, Debug)]
pub struct ConsoleMakeWriter {
    buffer: LogBuffer,
    to_console: bool,
}

impl ConsoleMakeWriter {
    /// Writes to the console (on wasm) and to `buffer`
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            to_console: cfg!(target_arch = "wasm32"),
        }
    }

    /// Writes to `buffer` only
    pub fn buffered(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            to_console: false,
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(self.buffer.clone(), Level::INFO, self.to_console)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(self.buffer.clone(), *meta.level(), self.to_console)
    }
}

/// Collects one formatted event and emits it on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    buffer: LogBuffer,
    level: Level,
    to_console: bool,
    pending: Vec<u8>,
}

impl ConsoleWriter {
    fn new(buffer: LogBuffer, level: Level, to_console: bool) -> Self {
        Self {
            buffer,
            level,
            to_console,
            pending: Vec::new(),
        }
    }

    fn emit(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending).trim_end().to_string();
        self.pending.clear();
        if text.is_empty() {
            return;
        }
        if self.to_console {
            to_console(self.level, &text);
        }
        self.buffer.push(text);
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

fn to_console(level: Level, text: &str) {
    let value = wasm_bindgen::JsValue::from_str(text);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

/// Install the global subscriber.
///
/// Returns the buffer holding the recent lines.
pub fn init_logger(app_name: &str, max_level: Level) -> Result<LogBuffer, String> {
    let buffer = LogBuffer::new(DEFAULT_LOG_CAPACITY);

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_target(false)
        .with_timer(LocalTime)
        .with_writer(ConsoleMakeWriter::new(buffer.clone()))
        .try_init()
        .map_err(|e| e.to_string())?;

    tracing::info!("[{}] logger ready", app_name);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::subscriber::with_default;

    fn subscriber(buffer: &LogBuffer) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .with_max_level(Level::DEBUG)
            .with_writer(ConsoleMakeWriter::buffered(buffer.clone()))
            .finish()
    }

    #[test]
    fn test_events_land_in_buffer() {
        let buffer = LogBuffer::new(10);
        with_default(subscriber(&buffer), || {
            tracing::info!("[ROWS] appended");
            tracing::warn!("[PREFS] write failed");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("[ROWS] appended"));
        assert!(lines[1].contains("WARN"));
        assert!(!lines[1].ends_with('\n'));
    }

    #[test]
    fn test_level_filter() {
        let buffer = LogBuffer::new(10);
        with_default(subscriber(&buffer), || {
            tracing::trace!("too chatty");
            tracing::debug!("kept");
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_last_line() {
        let buffer = LogBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_blank_writes_are_dropped() {
        let buffer = LogBuffer::new(4);
        {
            let mut writer = ConsoleWriter::new(buffer.clone(), Level::INFO, false);
            io::Write::write_all(&mut writer, b"\n").unwrap();
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_text_and_clear() {
        let buffer = LogBuffer::new(4);
        assert_eq!(buffer.text(), "");
        buffer.push("first".to_string());
        buffer.push("second".to_string());
        assert_eq!(buffer.text(), "first\nsecond");

        let shared = buffer.clone();
        shared.clear();
        assert!(buffer.is_empty());
        buffer.push("third".to_string());
        assert_eq!(shared.lines(), vec!["third"]);
    }
}
