use std::{env, net::SocketAddr, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::todo::NewTodo;
use service::memory::todo_store::MemoryTodoStore;
use service::todos::TodoStore;

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from config.toml or env vars, with sensible fallbacks
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            cfg.server.host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            cfg.server.port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000);
            cfg.store.normalize_from_env();
            cfg
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();

    // 内存存储，空查询列表带 TTL 快照缓存
    let store = MemoryTodoStore::new(Duration::from_millis(cfg.store.cache_ttl_ms));
    if cfg.store.seed_demo {
        for title in ["Learn Rust", "Refactor API"] {
            store.create(NewTodo { title: title.into(), completed: false }).await?;
        }
        info!(event = "demo_seeded", "inserted sample todos");
    }

    let state = ServerState::new(store);

    // Build router
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, cache_ttl_ms = cfg.store.cache_ttl_ms, "starting todo api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
