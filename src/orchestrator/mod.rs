//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 负责整批题目的处理和收尾，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Question>)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! clients::LlmClient (单次 HTTP 调用)
//! ```
//!
//! 严格按输入顺序逐题处理，不并发、不重试；全部完成后写文件、
//! 重新读取并校验格式

pub mod batch_processor;

pub use batch_processor::{build_answers, App};
