use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG` wins, then `-v` flags, then config.
pub fn directive(rust_log: Option<&str>, verbose: u8, configured: &str) -> String {
    match rust_log {
        Some(env) if !env.trim().is_empty() => env.to_string(),
        _ => match verbose {
            0 => configured.to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: u8, configured: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(directive(rust_log.as_deref(), verbose, configured));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
