//! 两阶段答题流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 计划阶段（temperature 0.3）→ 生成解题思路，不含最终答案
//! 2. 回答阶段（temperature 0.0）→ 按计划作答，只输出最终答案
//! 3. 清洗回答文本，返回结果
//!
//! 任一阶段调用失败即终止该题，不做重试。失败通过 [`AnswerOutcome::Failed`]
//! 表达，哨兵字符串只在序列化输出时出现

use tracing::{debug, warn};

use crate::clients::ChatApi;
use crate::config::Config;
use crate::processing::clean_output;
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 计划阶段采样温度
const PLAN_TEMPERATURE: f32 = 0.3;
/// 回答阶段采样温度
const ANSWER_TEMPERATURE: f32 = 0.0;

const PLAN_SYSTEM: &str = "You are a helpful assistant. Produce only a short plan.";
const ANSWER_SYSTEM: &str = "Follow the plan exactly and return only the answer.";

/// 单题处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// 得到清洗后的最终答案
    Answered(String),
    /// 某个阶段的调用失败
    Failed,
}

/// 两阶段答题流程
///
/// - 编排单个题目的计划、回答两次调用
/// - 不持有 HTTP 资源，只依赖 [`ChatApi`] 能力
pub struct QuestionFlow<T: ChatApi> {
    api: T,
    strip_language_tags: Vec<String>,
    log_plan_failure: bool,
    log_answer_failure: bool,
    verbose_logging: bool,
}

impl<T: ChatApi> QuestionFlow<T> {
    /// 创建新的答题流程
    pub fn new(config: &Config, api: T) -> Self {
        Self {
            api,
            strip_language_tags: config.strip_language_tags.clone(),
            log_plan_failure: config.log_plan_failure,
            log_answer_failure: config.log_answer_failure,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理单个题目
    pub async fn run(&self, question: &str, ctx: &QuestionCtx) -> AnswerOutcome {
        if self.verbose_logging {
            debug!("{} 题干: {}", ctx, truncate_text(question, 80));
        }

        // ========== 阶段 1: 计划 ==========
        let plan_result = self
            .api
            .chat_completions(&build_plan_prompt(question), PLAN_SYSTEM, PLAN_TEMPERATURE)
            .await;

        if !plan_result.ok {
            if self.log_plan_failure {
                warn!("{} 计划阶段调用失败, 状态: {}", ctx, plan_result.status);
            }
            return AnswerOutcome::Failed;
        }

        // 200 响应缺 content 时按空计划继续
        let plan = plan_result.text.unwrap_or_default();

        if self.verbose_logging {
            debug!("{} 计划: {}", ctx, truncate_text(&plan, 120));
        }

        // ========== 阶段 2: 回答 ==========
        let answer_result = self
            .api
            .chat_completions(
                &build_answer_prompt(question, &plan),
                ANSWER_SYSTEM,
                ANSWER_TEMPERATURE,
            )
            .await;

        if !answer_result.ok {
            if self.log_answer_failure {
                warn!("{} 回答阶段调用失败, 状态: {}", ctx, answer_result.status);
            }
            return AnswerOutcome::Failed;
        }

        let raw_text = answer_result.text.unwrap_or_default();
        AnswerOutcome::Answered(clean_output(&raw_text, &self.strip_language_tags))
    }
}

fn build_plan_prompt(question: &str) -> String {
    format!(
        "Problem: {} Before answering write a short plan on how you will solve it. \
         Don't include the final answer right now.",
        question
    )
}

fn build_answer_prompt(question: &str, plan: &str) -> String {
    format!(
        "Problem: {} Here is the plan: {} \
         Now follow this plan and only provide the final answer and no explaining.",
        question, plan
    )
}
