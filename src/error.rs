use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 输出校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 输入文件顶层不是 JSON 数组
    #[error("输入文件必须是题目对象组成的JSON数组: {path}")]
    NotAList { path: String },
    /// 题目对象缺少题干字段或类型不对
    #[error("第 {index} 个题目对象无法解析: {source}")]
    QuestionParseFailed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// 输出校验错误
///
/// 这些错误在答案文件已落盘之后抛出，属于硬性终止条件
#[derive(Debug, Error)]
pub enum ValidationError {
    /// 题目数与答案数不一致
    #[error("数量不一致: {questions} 个题目 vs {answers} 个答案")]
    LengthMismatch { questions: usize, answers: usize },
    /// 答案缺少 output 字段
    #[error("第 {index} 个答案缺少 'output' 字段")]
    MissingOutput { index: usize },
    /// output 字段不是字符串
    #[error("第 {index} 个答案的 output 不是字符串")]
    NonStringOutput { index: usize },
    /// output 超出长度限制
    #[error("第 {index} 个答案超过 5000 字符限制（实际 {length} 字符），请确认答案中没有包含中间推理过程")]
    OutputTooLong { index: usize, length: usize },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
