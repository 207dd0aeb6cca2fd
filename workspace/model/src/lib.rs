pub mod entities;
pub mod timeline;

pub use entities::payment_status::PaymentStatus;

// Re-export tracing for use in this crate
pub use tracing;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "budgetai=debug,compute=debug,model=info,tower_http=debug";

// Initialize tracing if not already initialized
#[cfg(not(test))]
pub fn init_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    // The log level can be controlled via the RUST_LOG environment variable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        // stdout carries the output of `budgetai project`
        .with_writer(std::io::stderr)
        .init();
}
