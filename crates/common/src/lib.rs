pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status_and_uptime() {
        let h = types::Health { status: "ok", uptime: 1.5 };
        let json = serde_json::to_value(&h).expect("serialize health");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["uptime"], 1.5);
    }
}
