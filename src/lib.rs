//! # Generate Answers
//!
//! 一个两阶段提示词答题的批处理客户端：读取题目列表，对每道题先让模型
//! 生成解题计划、再按计划作答，清洗输出后写入评分格式的答案文件并校验。
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 单次 HTTP 调用能力
//! - `LlmClient` - chat/completions 客户端，失败以 `CallResult` 返回而不抛错
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `answer_writer` - 答案文件读写能力
//! - `validator` - 评分格式校验能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionCtx` - 上下文封装（第几题/共几题）
//! - `QuestionFlow` - 流程编排（计划 → 回答 → 清洗）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量题目处理器：顺序遍历、
//!   写文件、重新读取并校验、输出统计

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod processing;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{CallResult, ChatApi, LlmClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerRecord, Question, FAILURE_SENTINEL};
pub use orchestrator::App;
pub use processing::clean_output;
pub use workflow::{AnswerOutcome, QuestionCtx, QuestionFlow};
