use serde::Serialize;

/// Health probe payload. `uptime` is seconds since process start.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub uptime: f64,
}
