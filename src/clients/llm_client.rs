//! LLM API 客户端
//!
//! 封装与 chat/completions 接口的单次交互。调用失败不抛错，
//! 统一以 [`CallResult`] 的形式返回给上层，保证批处理不会被单次坏调用打断。

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::utils::logging::truncate_text;

/// 单次请求的最大生成 token 数
const MAX_TOKENS: u32 = 256;

/// 单次 LLM 调用的结果
///
/// `text` 在 200 响应缺少 `choices[0].message.content` 时为 `None`，
/// 以便上层区分"空答案"和"响应结构不对"
#[derive(Debug, Clone)]
pub struct CallResult {
    /// 调用是否成功
    pub ok: bool,
    /// 模型返回的文本内容
    pub text: Option<String>,
    /// 完整的响应 JSON
    pub raw: Option<Value>,
    /// HTTP 状态码，网络层失败时为 -1
    pub status: i64,
}

impl CallResult {
    fn failed(status: i64) -> Self {
        Self {
            ok: false,
            text: None,
            raw: None,
            status,
        }
    }
}

/// 聊天补全接口
///
/// 在流程层与 HTTP 实现之间的接缝，测试时可以用内存实现替换
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// 发送一次 system + user 两条消息的聊天请求
    async fn chat_completions(&self, prompt: &str, system: &str, temperature: f32) -> CallResult;
}

/// LLM API 客户端
pub struct LlmClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("构建 HTTP 客户端失败")?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ChatApi for LlmClient {
    async fn chat_completions(&self, prompt: &str, system: &str, temperature: f32) -> CallResult {
        let url = format!("{}/chat/completions", self.api_base);
        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user",   "content": prompt},
            ],
            "temperature": temperature,
            "max_tokens": MAX_TOKENS,
        });

        debug!("调用 LLM API，模型: {}, 温度: {}", self.model, temperature);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                // 网络层失败（超时、连接失败等）
                warn!("LLM 请求失败: {}", e);
                return CallResult::failed(-1);
            }
        };

        let status = i64::from(response.status().as_u16());

        if response.status() != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "LLM API 返回非 200 状态: {}, 响应: {}",
                status,
                truncate_text(&body, 200)
            );
            return CallResult::failed(status);
        }

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                warn!("LLM 响应不是合法 JSON: {}", e);
                return CallResult::failed(status);
            }
        };

        let text = extract_content(&data);

        debug!("LLM API 调用成功");

        CallResult {
            ok: true,
            text,
            raw: Some(data),
            status,
        }
    }
}

/// 从响应 JSON 中提取第一条补全的文本内容
///
/// 结构缺失时返回 None，而不是默认空字符串
fn extract_content(data: &Value) -> Option<String> {
    data.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_content_normal_response() {
        let data = json!({
            "choices": [{"message": {"content": "42"}}],
            "usage": {"total_tokens": 10}
        });
        assert_eq!(extract_content(&data), Some("42".to_string()));
    }

    #[test]
    fn test_extract_content_missing_choices() {
        let data = json!({"usage": {"total_tokens": 0}});
        assert_eq!(extract_content(&data), None);
    }

    #[test]
    fn test_extract_content_empty_choices() {
        let data = json!({"choices": []});
        assert_eq!(extract_content(&data), None);
    }

    #[test]
    fn test_extract_content_non_string_content() {
        let data = json!({"choices": [{"message": {"content": 7}}]});
        assert_eq!(extract_content(&data), None);
    }
}
