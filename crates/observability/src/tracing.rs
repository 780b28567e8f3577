//! Log output for the catalog service.
//!
//! One JSON object per line. Events carry the span they happened in, so a
//! repository failure shows the HTTP request span (from the trace layer) and the
//! `#[instrument]`ed repository call it came from.

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset. Request spans from `tower_http` are emitted at
/// debug; sqlx statement logging is noisy at info.
const DEFAULT_FILTER: &str = "info,tower_http=debug,sqlx=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .try_init();
}
