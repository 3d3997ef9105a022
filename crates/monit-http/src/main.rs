//! monit-http: a small service instrumented with the request monitor.
//!
//! - Config: `monit.yaml` (or `$MONIT_CONFIG`), optional
//! - Monitoring: `INFLUXDB_URL`, falling back to `monitor.influxdb_url`
//! - Endpoints: /healthz, /readyz

use tracing_subscriber::{fmt, EnvFilter};

use monit_http::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let listen = cfg
        .server
        .listen_addr()
        .expect("server.listen must be a valid SocketAddr");

    let recorder = monit_influx::recorder_from_env_or(cfg.monitor.influxdb_url.as_deref()).await;

    let state = app_state::AppState::new(cfg, recorder);
    let app = router::build_router(state);

    tracing::info!(%listen, "monit-http starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
