use tracing_subscriber::EnvFilter;

/// The binary and the library it drives.
const CRATE_TARGETS: &[&str] = &["lunar", "lunar_calendar"];

/// Installs a stderr subscriber. Each `-v` raises the level one step from
/// `warn`; a set `RUST_LOG` wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
