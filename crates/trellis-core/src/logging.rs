pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("debug,trellis_core=trace,trellis_ui=trace")
        .init();
}

/// Like [`init`], but silently does nothing when a global subscriber is
/// already installed. Intended for tests.
pub fn try_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug,trellis_core=trace,trellis_ui=trace")
        .try_init();
}
