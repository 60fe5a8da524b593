use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fmt::{self, Display},
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// `<time> <LEVEL> <target>: <fields>`, one event per line.
///
/// The terminal gets a short clock time; the log file keeps the full local
/// date and offset so runs appended to the same file can be told apart.
struct LocalFmt {
    timestamp: &'static str,
}

impl LocalFmt {
    fn terminal() -> Self {
        Self {
            timestamp: "%H:%M:%S%.3f",
        }
    }

    fn file() -> Self {
        Self {
            timestamp: "%Y-%m-%dT%H:%M:%S%.6f%:z",
        }
    }
}

/// SGR code for each level.
fn level_style(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

/// Writes `text`, wrapped in an SGR sequence when the writer takes colour.
fn paint(
    writer: &mut Writer<'_>,
    style: &str,
    text: impl Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{style}m{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        paint(&mut writer, "2", Local::now().format(self.timestamp))?;
        write!(writer, " ")?;
        paint(
            &mut writer,
            level_style(meta.level()),
            format_args!("{:<5}", meta.level()),
        )?;
        write!(writer, " ")?;
        paint(&mut writer, "36", meta.target())?;
        write!(writer, ": ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Filter ---

/// Maps `-v` repetitions to a default directive. `RUST_LOG` wins when set.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn make_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

// --- Public API ---

/// Initializes logging. Call once at startup.
///
/// - Stderr: coloured when attached to a terminal, plain when piped, so the
///   report on stdout stays clean.
/// - File: when `log_file` is given, records are appended there as well.
/// - Level: from `verbosity`, or overridden by the RUST_LOG env var.
pub fn init_logging(
    verbosity: u8,
    log_file: Option<&Path>,
) -> Result<()> {
    let file_layer = log_file
        .map(|path| {
            File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))
        })
        .transpose()?
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .event_format(LocalFmt::file())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
        });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt::terminal())
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(make_filter(verbosity))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}
