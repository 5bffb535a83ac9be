//! 模型输出清洗模块
//!
//! 负责把模型返回的原始文本清洗为干净的答案字符串

/// 清洗模型输出
///
/// # 参数
/// - `text`: 模型返回的原始文本
/// - `language_tags`: 需要剔除的代码块语言标签（不区分大小写）
///
/// # 返回
/// 返回去掉代码块围栏和语言标签后的答案文本
///
/// 纯函数，无失败路径。对任意输入满足幂等：
/// `clean_output(clean_output(x)) == clean_output(x)`
pub fn clean_output(text: &str, language_tags: &[String]) -> String {
    let mut out = text.trim().to_string();

    // 剥离一层围栏可能让内部残留的反引号串顶到开头，
    // 循环剥到不动点为止。每轮要么不变要么严格变短，必然终止
    loop {
        let next = strip_fence(&out, language_tags);
        if next == out {
            return out;
        }
        out = next;
    }
}

/// 剥离一层代码块围栏和语言标签
fn strip_fence(text: &str, language_tags: &[String]) -> String {
    let mut out = text.trim().to_string();

    if out.starts_with("```") {
        // 去掉首尾的反引号围栏
        out = out.trim_matches('`').trim().to_string();

        // 第一行若是语言标签则丢弃
        if let Some(first_line) = out.lines().next() {
            let first_lower = first_line.trim().to_lowercase();
            if language_tags
                .iter()
                .any(|tag| first_lower.starts_with(&tag.to_lowercase()))
            {
                out = out
                    .lines()
                    .skip(1)
                    .collect::<Vec<_>>()
                    .join("\n")
                    .trim()
                    .to_string();
            }
        }
    }

    out
}
