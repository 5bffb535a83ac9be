/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    // --- 文件路径 ---
    pub input_path: String,
    pub output_path: String,
    // --- 日志行为 ---
    /// 计划阶段调用失败时是否输出告警
    pub log_plan_failure: bool,
    /// 回答阶段调用失败时是否输出告警
    pub log_answer_failure: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 清洗输出时需要剔除的代码块语言标签
    pub strip_language_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://10.4.58.53:41701/v1".to_string(),
            api_key: "cse476".to_string(),
            model: "bens_model".to_string(),
            request_timeout_secs: 60,
            input_path: "cse_476_final_project_test_data.json".to_string(),
            output_path: "cse_476_final_project_answers.json".to_string(),
            log_plan_failure: true,
            log_answer_failure: false,
            verbose_logging: false,
            strip_language_tags: vec!["python".to_string()],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base: std::env::var("LLM_API_BASE_URL").unwrap_or(default.api_base),
            api_key: std::env::var("LLM_API_KEY").unwrap_or(default.api_key),
            model: std::env::var("LLM_MODEL_NAME").unwrap_or(default.model),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            input_path: std::env::var("INPUT_PATH").unwrap_or(default.input_path),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(default.output_path),
            log_plan_failure: std::env::var("LOG_PLAN_FAILURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.log_plan_failure),
            log_answer_failure: std::env::var("LOG_ANSWER_FAILURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.log_answer_failure),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            strip_language_tags: std::env::var("STRIP_LANGUAGE_TAGS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
                .unwrap_or(default.strip_language_tags),
        }
    }
}
