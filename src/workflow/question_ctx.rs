//! 题目处理上下文
//!
//! 封装"我正在处理第几题"这一信息，只用于日志显示

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 题目序号（从1开始）
    pub question_index: usize,

    /// 题目总数
    pub total: usize,
}

impl QuestionCtx {
    /// 创建新的题目上下文
    pub fn new(question_index: usize, total: usize) -> Self {
        Self {
            question_index,
            total,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目 {}/{}]", self.question_index, self.total)
    }
}
