//! 答案文件读写
//!
//! 输出为带缩进的 JSON 数组，非 ASCII 字符按原文写入（serde_json 不转义多字节字符）。
//! 校验前先落盘，校验失败时磁盘上仍保留文件供排查

use serde_json::Value;
use tokio::fs;
use tracing::info;

use crate::error::{AppResult, FileError};
use crate::models::question::AnswerRecord;

/// 把答案列表写入输出文件
pub async fn write_answers(path: &str, answers: &[AnswerRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(answers).map_err(|source| {
        FileError::JsonParseFailed {
            path: path.to_string(),
            source,
        }
    })?;

    fs::write(path, json)
        .await
        .map_err(|source| FileError::WriteFailed {
            path: path.to_string(),
            source,
        })?;

    info!("✓ 已写入 {} 条答案: {}", answers.len(), path);

    Ok(())
}

/// 重新读取输出文件，返回原始 JSON 值供校验
///
/// 刻意不反序列化成 [`AnswerRecord`]，否则"缺字段/类型不对"这类
/// 格式问题在校验前就会被吞掉
pub async fn read_answers(path: &str) -> AppResult<Vec<Value>> {
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

    Ok(items.clone())
}
