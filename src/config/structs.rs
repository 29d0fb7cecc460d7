use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};
use crate::storage::NewLink;

/// Environment variable prefix used for overrides (`HN__SERVER__PORT=9000`)
pub const ENV_PREFIX: &str = "HN";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// Sections:
/// - server: listen address, port, worker count
/// - graphql: endpoint, schema declaration path, IDE and introspection toggles
/// - store: identifier prefix and seed links
/// - health: health probe route prefix
/// - logging: level, format, output file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    /// ENV 前缀：HN，分隔符：__
    /// 示例：HN__SERVER__PORT=9999
    ///
    /// Falls back to defaults when the sources cannot be deserialized.
    pub fn load(path: &str) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration, surfacing any source or deserialization error
    pub fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path.as_ref(), content).map_err(|e| {
            AppError::file_operation(format!(
                "Failed to write {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default)]
    pub unix_socket: Option<String>,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// GraphQL endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlConfig {
    #[serde(default = "default_graphql_endpoint")]
    pub endpoint: String,
    /// SDL file the resolver types are checked against at startup
    #[serde(default = "default_schema_path")]
    pub schema_path: String,
    #[serde(default = "default_true")]
    pub enable_graphiql: bool,
    #[serde(default = "default_true")]
    pub enable_introspection: bool,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// In-memory link store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    /// Links loaded at startup, in order. Ids are assigned by the store.
    #[serde(default = "default_seed")]
    pub seed: Vec<NewLink>,
}

/// Health probe routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_health_prefix")]
    pub prefix: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_true")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_true() -> bool {
    true
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    4000
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_graphql_endpoint() -> String {
    "/".to_string()
}

fn default_schema_path() -> String {
    "schema.graphql".to_string()
}

fn default_id_prefix() -> String {
    "link-".to_string()
}

fn default_seed() -> Vec<NewLink> {
    vec![NewLink {
        url: "www.howtographql.com".to_string(),
        description: "Fullstack tutorial for GraphQL".to_string(),
    }]
}

fn default_health_prefix() -> String {
    "/health".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            unix_socket: None,
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_graphql_endpoint(),
            schema_path: default_schema_path(),
            enable_graphiql: true,
            enable_introspection: true,
            max_depth: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            seed: default_seed(),
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            prefix: default_health_prefix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: true,
        }
    }
}
