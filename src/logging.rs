use tracing_subscriber::EnvFilter;

/// Workspace crates whose log events are enabled by default.
const CRATE_TARGETS: &[&str] = &[
    "debias",
    "debias_adjust",
    "debias_grid",
    "debias_io",
    "debias_stats",
    "debias_window",
];

/// Set up the global tracing subscriber.
///
/// Repeated `-v` flags raise the level: warn by default, then info,
/// debug, and trace. An explicit `RUST_LOG` value takes precedence over
/// the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
