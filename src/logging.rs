use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "codigo.log";
const DEFAULT_FILTER: &str = "codigo=info";

/// Keeps the file writer flushing. Dropping it flushes the remaining lines.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    panel_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    /// Lines for the terminal panel's output section. Yields once.
    pub fn take_panel_rx(&mut self) -> Option<Receiver<String>> {
        self.panel_rx.take()
    }
}

/// One formatted event bound for the panel. Sent line by line on drop.
struct PanelLine {
    buf: Vec<u8>,
    tx: Sender<String>,
}

impl Write for PanelLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for PanelLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            if self.tx.send(line.to_string()).is_err() {
                break;
            }
        }
    }
}

#[derive(Clone)]
struct PanelWriter {
    tx: Sender<String>,
}

impl<'a> MakeWriter<'a> for PanelWriter {
    type Writer = PanelLine;

    fn make_writer(&'a self) -> Self::Writer {
        PanelLine {
            buf: Vec::with_capacity(128),
            tx: self.tx.clone(),
        }
    }
}

fn resolve_log_dir() -> Option<PathBuf> {
    codigo::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("codigo").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// Two fmt layers under one filter: the daily file gets full detail
/// (timestamps, file and line), the terminal panel a compact line per event.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let (file_writer, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX));
    let (panel_tx, panel_rx) = mpsc::channel::<String>();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    let panel_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(PanelWriter { tx: panel_tx });

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(panel_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "panic");
        prev(info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "codigo started");

    Some(LoggingGuard {
        _file_guard: file_guard,
        panel_rx: Some(panel_rx),
    })
}
