use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 运行环境
///
/// 与 `NODE_ENV` 的取值保持一致，生产环境才会注册 Service Worker 和注入性能监控脚本。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: '{}'. Valid: development, production",
                s
            )),
        }
    }
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 服务器地址、端口、CPU 数量
/// - logging: 日志配置
/// - site: 站点环境、主题、内容目录
/// - contact: 联系表单限制与模拟提交延迟
/// - dev: 开发辅助命令配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub dev: DevConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：NODE_ENV（仅 site.environment）> ENV > config.toml > 默认值
    /// ENV 前缀：FOLIO，分隔符：__
    /// 示例：FOLIO__SERVER__PORT=9999
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment as EnvSource, File};

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 FOLIO，分隔符 __
            .add_source(
                EnvSource::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config = match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        };

        config.apply_node_env(std::env::var("NODE_ENV").ok().as_deref());
        config
    }

    /// NODE_ENV 覆盖 site.environment，无法识别的值保持原配置
    pub fn apply_node_env(&mut self, node_env: Option<&str>) {
        let Some(value) = node_env else {
            return;
        };
        match value.parse::<Environment>() {
            Ok(env) => self.site.environment = env,
            Err(e) => eprintln!("[WARN] Ignoring NODE_ENV: {}", e),
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
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
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 站点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub environment: Environment,
    /// 主题偏好的存储键（cookie 与 localStorage 共用）
    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// 覆盖内嵌 content/ 的目录，便于不重新编译直接修改内容
    #[serde(default)]
    pub content_dir: Option<String>,
    /// 装饰背景的帧率上限
    #[serde(default = "default_max_fps")]
    pub max_fps: u32,
}

/// 联系表单配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_subject_length")]
    pub max_subject_length: usize,
    #[serde(default = "default_min_message_length")]
    pub min_message_length: usize,
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// 模拟提交的延迟（毫秒）
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_contact_email")]
    pub email: String,
}

/// 开发辅助配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevConfig {
    /// clean-dev 要清理的缓存路径（相对工作目录）
    #[serde(default = "default_clean_paths")]
    pub clean_paths: Vec<String>,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_cpu_count() -> usize {
    num_cpus::get()
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

fn default_enable_rotation() -> bool {
    true
}

fn default_theme_storage_key() -> String {
    "portfolio-theme".to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

fn default_max_fps() -> u32 {
    60
}

fn default_max_name_length() -> usize {
    100
}

fn default_max_subject_length() -> usize {
    200
}

fn default_min_message_length() -> usize {
    10
}

fn default_max_message_length() -> usize {
    1000
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_contact_email() -> String {
    "anuveshchilwal007@gmail.com".to_string()
}

fn default_clean_paths() -> Vec<String> {
    vec![
        "target/debug/incremental".to_string(),
        ".cache".to_string(),
        "node_modules/.cache".to_string(),
    ]
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
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
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            theme_storage_key: default_theme_storage_key(),
            default_theme: default_theme(),
            content_dir: None,
            max_fps: default_max_fps(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_subject_length: default_max_subject_length(),
            min_message_length: default_min_message_length(),
            max_message_length: default_max_message_length(),
            submit_delay_ms: default_submit_delay_ms(),
            email: default_contact_email(),
        }
    }
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            clean_paths: default_clean_paths(),
        }
    }
}
