use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` into the global `OnceLock`. Only the first call reads
/// the file.
///
/// Runs before the logger is installed, so problems go to stderr. A missing
/// or unparseable file yields the defaults. On the web there is no file
/// system and the defaults are always used.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not readable ({e}), using defaults");
            AppConfig::default()
        }
    })
}

/// The loaded config, or the defaults if [`load_config`] has not run.
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}
