//! API 执行器 - 基础设施层
//!
//! 持有唯一的认证 HTTP 客户端，只暴露"调用 REST API"的能力

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// API 执行器
///
/// 职责：
/// - 持有唯一的 reqwest::Client 和访问令牌
/// - 暴露 get_as() 能力
/// - 不认识 Course / CourseWork / Submission
/// - 不处理业务流程
pub struct ApiExecutor {
    client: Client,
    access_token: String,
}

impl ApiExecutor {
    /// 创建新的 API 执行器
    pub fn new(access_token: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }

    /// 发送带认证的 GET 请求并反序列化为指定类型
    ///
    /// # 参数
    /// - `operation`: 操作名（用于错误上下文，如 "courses.list"）
    /// - `url`: 完整的请求地址
    /// - `query`: 查询参数
    ///
    /// # 返回
    /// 返回反序列化后的类型
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::api_bad_status(operation, status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::api_json_failed(operation, e))
    }
}
