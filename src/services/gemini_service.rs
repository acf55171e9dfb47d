//! Gemini 服务 - 业务能力层
//!
//! 只负责"调用 Gemini 生成内容"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 通过 Gemini 的 OpenAI 兼容端点访问

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;

/// Gemini 服务
///
/// 职责：
/// - 调用 Gemini API 生成文本
/// - 只处理单次请求，不关心流程顺序
pub struct GeminiService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl GeminiService {
    /// 创建新的 Gemini 服务
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.gemini_api_key)
            .with_api_base(&config.gemini_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.gemini_model_name.clone(),
        }
    }

    /// 通用的生成接口
    ///
    /// # 参数
    /// - `prompt`: 用户消息内容
    /// - `system_prompt`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 Gemini 的响应内容
    pub async fn generate_content(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String> {
        debug!("调用 Gemini API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", prompt.len());

        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_prompt {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(2048u32)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("Gemini API 调用失败: {}", e);
            anyhow::anyhow!("Gemini API 调用失败: {}", e)
        })?;

        debug!("Gemini API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("Gemini 返回内容为空"))?;

        Ok(content.trim().to_string())
    }

    /// 结合作业要求点评提交内容
    pub async fn summarize_submission(
        &self,
        submission_content: &str,
        assignment_description: &str,
    ) -> Result<String> {
        let prompt = format!(
            "作业要求：{}\n\n提交内容：{}\n\n请结合作业要求分析这份提交，并给出点评和改进建议。",
            assignment_description, submission_content
        );
        self.generate_content(&prompt, None).await
    }
}
