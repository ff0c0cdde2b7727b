//! nametally gateway binary.
//!
//! - `/hello/{name}` : greeting + per-name visit tally
//! - `/health`       : host CPU/memory/load stats
//! - `/counts`       : read (GET) or clear (DELETE) the tally

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use nametally_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Optional config file; defaults carry the fixed port 8080.
    let cfg = config::load_or_default("nametally.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "nametally-gateway starting");
    // Bind failure is the only fatal error path.
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
