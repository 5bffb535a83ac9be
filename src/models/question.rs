//! 题目与答案的数据模型

use serde::{Deserialize, Serialize};

use crate::workflow::AnswerOutcome;

/// 调用失败时写入输出文件的哨兵值
///
/// 仅在序列化的输出格式中使用，流程层内部用 [`AnswerOutcome`] 区分成败
pub const FAILURE_SENTINEL: &str = "ERROR";

/// 题目记录
///
/// 输入文件中的每个对象至少包含 `input` 字段（题干文本），
/// 其余字段一律忽略。加载后只读，不会被修改
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    /// 题干文本
    pub input: String,
}

/// 答案记录
///
/// 输出文件中的每个对象恰好包含一个 `output` 字段，
/// 与输入题目按下标一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub output: String,
}

impl From<AnswerOutcome> for AnswerRecord {
    fn from(outcome: AnswerOutcome) -> Self {
        let output = match outcome {
            AnswerOutcome::Answered(text) => text,
            AnswerOutcome::Failed => FAILURE_SENTINEL.to_string(),
        };
        Self { output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_outcome_maps_to_sentinel() {
        let record = AnswerRecord::from(AnswerOutcome::Failed);
        assert_eq!(record.output, "ERROR");
    }

    #[test]
    fn test_answered_outcome_keeps_text() {
        let record = AnswerRecord::from(AnswerOutcome::Answered("42".to_string()));
        assert_eq!(record.output, "42");
    }

    #[test]
    fn test_question_ignores_extra_fields() {
        let json = r#"{"input": "1+1=?", "category": "math", "id": 7}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.input, "1+1=?");
    }
}
