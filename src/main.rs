//! Entry point for the Budget Engine binary.
//!
//! Running this binary will start an HTTP server that exposes a
//! minimal API for optimising trip budgets.  The bind address may be
//! specified via the `BUDGET_BIND_ADDR` environment variable; if
//! unset the server binds to `127.0.0.1:3000`.  Log verbosity is
//! controlled through `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("BUDGET_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    if let Err(err) = budget_engine::api::serve(&addr).await {
        tracing::error!("error running server: {err}");
        std::process::exit(1);
    }
}
