use serde::Deserialize;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classroom API 基础地址
    pub classroom_api_base_url: String,
    /// Docs API 基础地址
    pub docs_api_base_url: String,
    /// OAuth 令牌文件路径
    pub token_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub gemini_api_key: String,
    pub gemini_api_base_url: String,
    pub gemini_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classroom_api_base_url: "https://classroom.googleapis.com".to_string(),
            docs_api_base_url: "https://docs.googleapis.com".to_string(),
            token_path: "token.json".to_string(),
            verbose_logging: false,
            gemini_api_key: String::new(),
            gemini_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
                .to_string(),
            gemini_model_name: "gemini-2.0-flash".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：先读 config.toml（如果存在），再用环境变量覆盖
    pub fn load() -> Self {
        let base = Self::from_file("config.toml").unwrap_or_default();
        Self::from_env_with(base)
    }

    /// 从 TOML 文件读取配置，文件缺失或解析失败时返回 None
    pub fn from_file(path: &str) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("解析配置文件 {} 失败: {}", path, e);
                None
            }
        }
    }

    /// 只从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_env_with(Self::default())
    }

    fn from_env_with(default: Self) -> Self {
        Self {
            classroom_api_base_url: std::env::var("CLASSROOM_API_BASE_URL")
                .unwrap_or(default.classroom_api_base_url),
            docs_api_base_url: std::env::var("DOCS_API_BASE_URL")
                .unwrap_or(default.docs_api_base_url),
            token_path: std::env::var("TOKEN_PATH").unwrap_or(default.token_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or(default.gemini_api_key),
            gemini_api_base_url: std::env::var("GEMINI_API_BASE_URL")
                .unwrap_or(default.gemini_api_base_url),
            gemini_model_name: std::env::var("GEMINI_MODEL_NAME")
                .unwrap_or(default.gemini_model_name),
        }
    }
}
