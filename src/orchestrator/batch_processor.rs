//! 批量答题处理器 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：构建 HTTP 客户端和答题流程
//! 2. **批量加载**：读取输入文件中的全部题目
//! 3. **顺序处理**：按输入顺序逐题调用两阶段流程，单题失败不中断整批
//! 4. **落盘与校验**：先写输出文件，再重新读取并按评分格式校验
//! 5. **全局统计**：汇总成功/失败数量
//!
//! 校验失败属于硬性终止，但发生在写文件之后，失败的运行仍会留下
//! 输出文件供排查

use anyhow::Result;
use tracing::info;

use crate::clients::{ChatApi, LlmClient};
use crate::config::Config;
use crate::models::question::{AnswerRecord, Question};
use crate::models::load_questions;
use crate::services::{answer_writer, validator};
use crate::utils::logging;
use crate::workflow::{AnswerOutcome, QuestionCtx, QuestionFlow};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuestionFlow<LlmClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let client = LlmClient::new(&config)?;
        let flow = QuestionFlow::new(&config, client);

        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载全部题目，输入文件问题在发出任何请求之前就终止
        let questions = load_questions(&self.config.input_path).await?;
        logging::log_questions_loaded(questions.len(), &self.config.input_path);

        // 逐题生成答案
        let answers = build_answers(&self.flow, &questions).await;

        // 先写文件，再重新读取校验序列化结果
        answer_writer::write_answers(&self.config.output_path, &answers).await?;
        let saved = answer_writer::read_answers(&self.config.output_path).await?;
        validator::validate_results(questions.len(), &saved)?;

        let failed = answers
            .iter()
            .filter(|a| a.output == crate::models::FAILURE_SENTINEL)
            .count();
        logging::print_final_stats(answers.len(), failed, &self.config.output_path);

        Ok(())
    }
}

/// 按输入顺序为每个题目生成一条答案记录
///
/// 失败的题目写入哨兵值，保证输出与输入按下标对齐
pub async fn build_answers<T: ChatApi>(
    flow: &QuestionFlow<T>,
    questions: &[Question],
) -> Vec<AnswerRecord> {
    let total = questions.len();
    let mut answers = Vec::with_capacity(total);

    for (i, question) in questions.iter().enumerate() {
        let ctx = QuestionCtx::new(i + 1, total);
        info!("📝 正在处理 {}...", ctx);

        let outcome = flow.run(&question.input, &ctx).await;
        if outcome == AnswerOutcome::Failed {
            info!("{} ❌ 处理失败，写入哨兵值", ctx);
        }

        answers.push(AnswerRecord::from(outcome));
    }

    answers
}
