use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件也能启动
            .add_source(Config::try_from(&AppConfig::default())?)
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("HWPORTAL")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("portal.base_url", std::env::var("PORTAL_BASE_URL").ok())?
            .set_override_option(
                "portal.session_cookie",
                std::env::var("PORTAL_SESSION_COOKIE").ok(),
            )?
            .set_override_option(
                "session.poll_interval_secs",
                std::env::var("SESSION_POLL_INTERVAL").ok(),
            )?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.session.poll_interval_secs == 0 {
            return Err(ConfigError::Message(
                "session.poll_interval_secs must be greater than 0".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 会话 Cookie (如果配置了)
    pub fn session_cookie(&self) -> Option<&str> {
        if self.portal.session_cookie.is_empty() {
            None
        } else {
            Some(&self.portal.session_cookie)
        }
    }
}
