use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 凭据相关错误
    #[error("认证错误: {0}")]
    Auth(#[from] AuthError),
    /// Google API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
}

/// 凭据相关错误
#[derive(Debug, Error)]
pub enum AuthError {
    /// 找不到已持久化的访问令牌
    #[error("未找到访问令牌 (检查 {path} 或环境变量 GOOGLE_ACCESS_TOKEN)")]
    TokenNotFound { path: String },
    /// 读取令牌文件失败
    #[error("读取令牌文件失败 ({path}): {source}")]
    TokenReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 令牌文件格式不正确
    #[error("解析令牌文件失败 ({path}): {source}")]
    TokenParseFailed {
        path: String,
        source: serde_json::Error,
    },
}

/// Google API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({operation}): {source}")]
    RequestFailed {
        operation: String,
        source: reqwest::Error,
    },
    /// API 返回非成功状态码
    #[error("API返回错误状态 ({operation}): HTTP {status}, 响应: {body}")]
    BadStatus {
        operation: String,
        status: u16,
        body: String,
    },
    /// 响应体解析失败
    #[error("响应解析失败 ({operation}): {source}")]
    JsonParseFailed {
        operation: String,
        source: reqwest::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(operation: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            operation: operation.into(),
            source,
        })
    }

    /// 创建API错误状态错误
    pub fn api_bad_status(operation: impl Into<String>, status: u16, body: String) -> Self {
        AppError::Api(ApiError::BadStatus {
            operation: operation.into(),
            status,
            body,
        })
    }

    /// 创建响应解析失败错误
    pub fn api_json_failed(operation: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            operation: operation.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
