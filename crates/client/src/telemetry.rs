/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Native builds only; in the browser the Dioxus logger owns the subscriber.
/// Safe to call more than once: later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {}
