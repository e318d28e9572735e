use prometheus::register_int_counter_vec;
use prometheus::IntCounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_SERVED: IntCounterVec = register_int_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions handed out to quiz players",
        &["category"]
    )
    .expect("quiz counter registers once");
}

/// Filter for the HTTP server when `LOG_LEVEL` is unset or unparsable.
pub const SERVER_LOG_FILTER: &str = "info";
/// Keeps sqlx per-statement logs out of CLI output.
pub const CLI_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global subscriber.
///
/// `LOG_LEVEL` takes an `EnvFilter` directive string and falls back to
/// `default_filter`. `INCLUDE_SPAN_EVENTS` is `true` (enter and exit),
/// `full`, `close` or anything else for none.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    let filter = log_filter(std::env::var("LOG_LEVEL").ok().as_deref(), default_filter);
    let events = span_events(std::env::var("INCLUDE_SPAN_EVENTS").ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_span_events(events))
        .try_init()
}

fn log_filter(directives: Option<&str>, default_filter: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

fn span_events(value: Option<&str>) -> FmtSpan {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true") => FmtSpan::ENTER | FmtSpan::EXIT,
        Some("full") => FmtSpan::FULL,
        Some("close") => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}
