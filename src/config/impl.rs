use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::{DEFAULT_CONFIG_PATH, StaticConfig};

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to the default config file when
/// `init_config` was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(DEFAULT_CONFIG_PATH)))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (or "config.toml" when `None`).
/// If the file doesn't exist, uses in-memory defaults plus environment overrides.
///
/// # Examples
/// ```no_run
/// use hackernews_api::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}
