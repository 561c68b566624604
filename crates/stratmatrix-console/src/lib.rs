//! Colorful console output for StratMatrix events.
//!
//! Provides a custom `tracing` layer that formats matrix events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Render passes, imports, exports and session resets
//! - **WARN**: Refused imports
//! - **DEBUG**: Grid cells holding more points than there are anchors

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directive applied when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "stratmatrix=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. Prints the
/// banner and installs a subscriber filtered by `RUST_LOG`, defaulting to
/// [`DEFAULT_DIRECTIVE`].
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let mut builder = EnvFilter::builder();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            builder = builder.with_default_directive(directive);
        }
        let filter = builder.from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(MatrixConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
  ___ _           _   __  __      _       _
 / __| |_ _ _ __ _| |_|  \/  |__ _| |_ _ _(_)_ __
 \__ \  _| '_/ _` |  _| |\/| / _` |  _| '_| \ \ /
 |___/\__|_| \__,_|\__|_|  |_\__,_|\__|_| |_/_\_\
"#;

    let version_line = format!("            v{} - Use Case Priority Matrix\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats StratMatrix events with colors.
///
/// Output goes to stderr so that layouts and CSV written to stdout stay
/// machine-readable.
pub struct MatrixConsoleLayer;

impl<S: Subscriber> Layer<S> for MatrixConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("stratmatrix") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    reason: Option<String>,
    record_count: Option<u64>,
    column_count: Option<u64>,
    point_count: Option<u64>,
    cell_count: Option<u64>,
    shared_cells: Option<u64>,
    points: Option<u64>,
    duration_ms: Option<u64>,
    col: Option<i64>,
    row: Option<i64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "reason" => self.reason = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "record_count" => self.record_count = Some(value),
            "column_count" => self.column_count = Some(value),
            "point_count" => self.point_count = Some(value),
            "cell_count" => self.cell_count = Some(value),
            "shared_cells" => self.shared_cells = Some(value),
            "points" => self.points = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "col" => self.col = Some(value as i64),
            "row" => self.row = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "col" => self.col = Some(value),
            "row" => self.row = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "layout_start" => format_layout_start(v),
        "placement" => format_placement(v),
        "layout_end" => format_layout_end(v),
        "cell_overflow" => format_cell_overflow(v, level),
        "import" => format_import(v),
        "import_rejected" => format_import_rejected(v),
        "export" => format_export(v),
        "session_reset" => format_session_reset(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_layout_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Rendering │ {} use cases",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.record_count).bright_yellow(),
    )
}

fn format_placement(v: &EventVisitor) -> String {
    format!(
        "{} {} Placement │ {} cells │ {} shared",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.cell_count).white(),
        count(v.shared_cells).bright_magenta(),
    )
}

fn format_layout_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Rendered │ {} points │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.point_count).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_cell_overflow(v: &EventVisitor, level: Level) -> String {
    if level < Level::DEBUG {
        return String::new();
    }
    format!(
        "{} {} Cell ({}, {}) holds {} points, anchors repeat",
        format_elapsed(),
        "↻".bright_black(),
        v.col.unwrap_or(0),
        v.row.unwrap_or(0),
        count(v.points).bright_black(),
    )
}

fn format_import(v: &EventVisitor) -> String {
    format!(
        "{} {} Imported │ {} use cases │ {} columns",
        format_elapsed(),
        "⇩".bright_green(),
        count(v.record_count).bright_yellow(),
        count(v.column_count).white(),
    )
}

fn format_import_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Import refused │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.reason.as_deref().unwrap_or("unknown reason").bright_red(),
    )
}

fn format_export(v: &EventVisitor) -> String {
    format!(
        "{} {} Exported │ {} use cases",
        format_elapsed(),
        "⇧".bright_green(),
        count(v.record_count).bright_yellow(),
    )
}

fn format_session_reset(v: &EventVisitor) -> String {
    format!(
        "{} {} Session reset │ {} use cases cleared",
        format_elapsed(),
        "⟲".bright_yellow(),
        count(v.record_count).white(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
