use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::auth::ServerState;
use crate::routes;
use service::datasource;
use service::movie::{InMemoryMovieRepository, MovieService};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml if present, otherwise fall back to env vars
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg.auth.normalize_from_env();
            cfg
        }
    }
}

/// Wire store -> service -> state explicitly; tests reuse this
pub fn build_state(cfg: &configs::AppConfig) -> ServerState {
    // 种子数据装入内存仓储
    let repo = Arc::new(InMemoryMovieRepository::new(datasource::movies()));
    let movies = Arc::new(MovieService::new(repo));
    ServerState { movies, auth: cfg.auth.clone() }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();
    let state = build_state(&cfg);

    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting movies api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
