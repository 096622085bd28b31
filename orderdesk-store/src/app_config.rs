use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub archive: ArchiveConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArchiveConfig {
    pub path: String,
}

impl Config {
    /// Built-in defaults, overlaid by an optional `config/orderdesk` file,
    /// overlaid by `ORDERDESK_*` environment variables
    /// (e.g. `ORDERDESK_ARCHIVE__PATH`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("archive.path", "orders.json")?
            .add_source(config::File::with_name("config/orderdesk").required(false))
            .add_source(config::Environment::with_prefix("ORDERDESK").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_orders_json() {
        let config = Config::load().unwrap();
        assert_eq!(config.archive.path, "orders.json");
    }
}
