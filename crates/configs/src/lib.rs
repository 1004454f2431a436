use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Lifetime of the cached unfiltered listing, in milliseconds.
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    /// Insert a couple of sample todos at startup.
    #[serde(default)]
    pub seed_demo: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { cache_ttl_ms: default_cache_ttl_ms(), seed_demo: false }
    }
}

fn default_cache_ttl_ms() -> u64 { 1000 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 归一化 store（支持从环境变量覆盖 TTL）
        self.store.normalize_from_env();
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StoreConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(ttl) = std::env::var("TODO_CACHE_TTL_MS") {
            if let Ok(ms) = ttl.parse::<u64>() {
                self.cache_ttl_ms = ms;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl_ms == 0 {
            return Err(anyhow!("store.cache_ttl_ms 必须为正整数毫秒"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.store.cache_ttl_ms, 1000);
        assert!(!cfg.store.seed_demo);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [store]
            seed_demo = true
            "#,
        )
        .expect("parse toml");
        cfg.normalize_and_validate().expect("validate");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.cache_ttl_ms, 1000);
        assert!(cfg.store.seed_demo);
    }

    #[test]
    fn rejects_zero_port_and_zero_ttl() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 0
            "#,
        )
        .expect("parse toml");
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg: AppConfig = toml::from_str(
            r#"
            [store]
            cache_ttl_ms = 0
            "#,
        )
        .expect("parse toml");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn blank_host_normalizes_to_loopback() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "  "
            port = 3000
            "#,
        )
        .expect("parse toml");
        cfg.normalize_and_validate().expect("validate");
        assert_eq!(cfg.server.host, "127.0.0.1");
    }
}
