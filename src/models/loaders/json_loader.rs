//! 题目文件加载器
//!
//! 输入文件格式错误属于启动期致命错误，在发出任何网络请求之前就终止

use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::error::{AppResult, FileError};
use crate::models::question::Question;

/// 从 JSON 文件加载题目列表
///
/// 要求文件顶层是一个对象数组，每个对象包含字符串类型的 `input` 字段。
/// 额外字段忽略，题目顺序即文件内顺序
pub async fn load_questions(path: &str) -> AppResult<Vec<Question>> {
    if !Path::new(path).exists() {
        return Err(FileError::NotFound {
            path: path.to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.to_string(),
            source,
        })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| FileError::JsonParseFailed {
            path: path.to_string(),
            source,
        })?;

    let items = value.as_array().ok_or_else(|| FileError::NotAList {
        path: path.to_string(),
    })?;

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let question: Question = serde_json::from_value(item.clone())
            .map_err(|source| FileError::QuestionParseFailed { index, source })?;
        questions.push(question);
    }

    tracing::info!("成功加载 {} 个题目: {}", questions.len(), path);

    Ok(questions)
}
