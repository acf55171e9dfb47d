//! 凭据管理 - 基础设施层
//!
//! 只读取已持久化的 OAuth 访问令牌；授权流程本身由外部工具完成

use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AuthError};

/// token.json 中持久化的令牌
#[derive(Debug, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// 加载访问令牌
///
/// 优先级：环境变量 GOOGLE_ACCESS_TOKEN > 令牌文件
pub fn load_access_token(token_path: &str) -> Result<String, AppError> {
    if let Ok(token) = std::env::var("GOOGLE_ACCESS_TOKEN") {
        if !token.is_empty() {
            debug!("使用环境变量中的访问令牌");
            return Ok(token);
        }
    }

    let content = std::fs::read_to_string(token_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::Auth(AuthError::TokenNotFound {
                path: token_path.to_string(),
            })
        } else {
            AppError::Auth(AuthError::TokenReadFailed {
                path: token_path.to_string(),
                source: e,
            })
        }
    })?;

    let stored: StoredToken = serde_json::from_str(&content).map_err(|e| {
        AppError::Auth(AuthError::TokenParseFailed {
            path: token_path.to_string(),
            source: e,
        })
    })?;

    debug!("已从 {} 加载访问令牌", token_path);
    Ok(stored.access_token)
}
