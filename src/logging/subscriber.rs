//! Tracing subscriber setup: console formatter, file layer, and initialisation.
//!
//! Both outputs classify an event into a [`Kind`] once and then render it
//! for their medium, so the console and the log file always agree on what
//! an event is.
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing::field::{Field, Visit};

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};

/// Target used for stage headers.
pub(super) const STAGE_TARGET: &str = "dotstribute::stage";
/// Target used for preview (dry-run) messages.
pub(super) const DRY_RUN_TARGET: &str = "dotstribute::dry_run";

/// What an event means to the reader, independent of where it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Stage,
    Preview,
    Error,
    Warn,
    Info,
    Debug,
}

impl Kind {
    fn of(level: Level, target: &str) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO if target == STAGE_TARGET => Self::Stage,
            Level::INFO if target == DRY_RUN_TARGET => Self::Preview,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }
}

/// A classified event and its `message` field.
#[derive(Debug)]
struct Line {
    kind: Kind,
    message: String,
}

impl Line {
    fn from_event(event: &tracing::Event<'_>) -> Self {
        let metadata = event.metadata();
        let mut line = Self {
            kind: Kind::of(*metadata.level(), metadata.target()),
            message: String::new(),
        };
        event.record(&mut line);
        line
    }

    /// Colored console rendering, without the trailing newline.
    fn console(&self) -> String {
        let msg = &self.message;
        match self.kind {
            Kind::Error => format!("\x1b[31mERROR\x1b[0m {msg}"),
            Kind::Warn => format!("\x1b[33mWARN\x1b[0m  {msg}"),
            Kind::Stage => format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Kind::Preview => format!("  \x1b[33m[PREVIEW]\x1b[0m {msg}"),
            Kind::Info => format!("  {msg}"),
            Kind::Debug => format!("  \x1b[2m{msg}\x1b[0m"),
        }
    }

    /// Plain log file rendering stamped with `ts`.
    fn file(&self, ts: &str) -> String {
        let msg = strip_ansi(&self.message);
        let tag = match self.kind {
            Kind::Stage => return format!("[{ts}] ==> {msg}"),
            Kind::Preview => "[preview] ",
            Kind::Error => "[error] ",
            Kind::Warn => "[warn] ",
            Kind::Debug => "[debug] ",
            Kind::Info => "",
        };
        format!("[{ts}]     {tag}{msg}")
    }
}

impl Visit for Line {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Banner written at the top of each run's log file.
fn run_header() -> String {
    let version =
        option_env!("DOTSTRIBUTE_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
    let rule = "=".repeat(42);
    format!(
        "{rule}\ndotstribute {version} {}\n{rule}\n",
        format_utc_datetime()
    )
}

/// Appends every event to the per-command log file, timestamped and with
/// ANSI codes stripped.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open the log file for `command` under the cache directory.
    ///
    /// Returns `None` if the cache directory cannot be created or the file
    /// cannot be opened.
    pub(super) fn new(command: &str) -> Option<Self> {
        Self::at(&log_file_path(command)?)
    }

    /// Truncate `path`, write the run header, and append to it from then on.
    pub(super) fn at(path: &Path) -> Option<Self> {
        fs::write(path, run_header()).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let line = Line::from_event(event).file(&format_utc_time());
        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// Console [`FormatEvent`](tracing_subscriber::fmt::FormatEvent) for
/// dotstribute's output style.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        writeln!(writer, "{}", Line::from_event(event).console())
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Console output goes to stdout (warnings and errors to stderr) and only
/// includes `debug` events when `verbose` is set.  Every event at `debug`
/// and above is also appended to `$XDG_CACHE_HOME/dotstribute/<command>.log`.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // Warnings and errors on stderr; everything else on stdout.
    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(make_writer)
        .with_filter(console_level);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
