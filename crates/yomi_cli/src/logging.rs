use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Targets that get the `-v` level; everything else stays at warn.
const WORKSPACE_TARGETS: &[&str] = &["yomi", "yomi_cli", "yomi_daf", "yomi_time"];

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    let mut directives = vec![LevelFilter::WARN.to_string()];
    directives.extend(WORKSPACE_TARGETS.iter().map(|t| format!("{t}={level}")));
    directives.join(",")
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// directives derived from `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}
