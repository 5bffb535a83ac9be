//! 输出格式校验
//!
//! 对照评分格式检查重新读取的答案文件，任何一项不满足都直接终止整个运行

use serde_json::Value;

use crate::error::ValidationError;

/// 单条答案允许的最大字符数（不含该值本身，5000 即违规）
const MAX_OUTPUT_CHARS: usize = 5000;

/// 校验答案列表
///
/// # 参数
/// - `question_count`: 输入题目数量
/// - `answers`: 重新读取的答案 JSON 值
///
/// # 校验项
/// 1. 答案数与题目数一致
/// 2. 每条答案包含 `output` 字段
/// 3. `output` 是字符串
/// 4. `output` 严格短于 5000 字符
pub fn validate_results(question_count: usize, answers: &[Value]) -> Result<(), ValidationError> {
    if question_count != answers.len() {
        return Err(ValidationError::LengthMismatch {
            questions: question_count,
            answers: answers.len(),
        });
    }

    for (index, answer) in answers.iter().enumerate() {
        let output = answer
            .get("output")
            .ok_or(ValidationError::MissingOutput { index })?;

        let text = output
            .as_str()
            .ok_or(ValidationError::NonStringOutput { index })?;

        let length = text.chars().count();
        if length >= MAX_OUTPUT_CHARS {
            return Err(ValidationError::OutputTooLong { index, length });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_answers_pass() {
        let answers = vec![json!({"output": "42"}), json!({"output": "月球"})];
        assert!(validate_results(2, &answers).is_ok());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let answers = vec![json!({"output": "42"})];
        let err = validate_results(2, &answers).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::LengthMismatch {
                questions: 2,
                answers: 1
            }
        ));
    }

    #[test]
    fn test_missing_output_rejected() {
        let answers = vec![json!({"output": "ok"}), json!({"answer": "wrong key"})];
        let err = validate_results(2, &answers).unwrap_err();
        assert!(matches!(err, ValidationError::MissingOutput { index: 1 }));
    }

    #[test]
    fn test_non_string_output_rejected() {
        let answers = vec![json!({"output": 42})];
        let err = validate_results(1, &answers).unwrap_err();
        assert!(matches!(err, ValidationError::NonStringOutput { index: 0 }));
    }

    #[test]
    fn test_output_length_boundary() {
        // 4999 字符允许
        let ok = vec![json!({ "output": "a".repeat(4999) })];
        assert!(validate_results(1, &ok).is_ok());

        // 5000 字符违规（上限不含）
        let too_long = vec![json!({ "output": "a".repeat(5000) })];
        let err = validate_results(1, &too_long).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutputTooLong {
                index: 0,
                length: 5000
            }
        ));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 4999 个多字节字符：字节数超 5000 但字符数合规
        let ok = vec![json!({ "output": "月".repeat(4999) })];
        assert!(validate_results(1, &ok).is_ok());
    }

    #[test]
    fn test_non_object_entry_rejected() {
        let answers = vec![json!("bare string")];
        let err = validate_results(1, &answers).unwrap_err();
        assert!(matches!(err, ValidationError::MissingOutput { index: 0 }));
    }

    #[test]
    fn test_sentinel_is_a_valid_answer() {
        // 失败哨兵也是合法记录，不能破坏对齐
        let answers = vec![json!({"output": "ERROR"})];
        assert!(validate_results(1, &answers).is_ok());
    }
}
