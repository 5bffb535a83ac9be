use generate_answers::models::load_questions;
use generate_answers::services::{read_answers, validate_results, write_answers};
use generate_answers::utils::logging;
use generate_answers::{AnswerRecord, App, Config};

/// 完整的落盘-重读-校验链路，不依赖网络
#[tokio::test]
async fn test_write_read_validate_round_trip() {
    let input_path = std::env::temp_dir().join("generate_answers_it_questions.json");
    let output_path = std::env::temp_dir().join("generate_answers_it_answers.json");

    tokio::fs::write(
        &input_path,
        r#"[{"input": "1+1=?"}, {"input": "地球的卫星是什么？", "category": "astro"}]"#,
    )
    .await
    .expect("写入题目文件失败");

    let questions = load_questions(&input_path.to_string_lossy())
        .await
        .expect("加载题目失败");
    assert_eq!(questions.len(), 2);

    // 模拟一题成功一题失败的批次结果
    let answers = vec![
        AnswerRecord {
            output: "2".to_string(),
        },
        AnswerRecord {
            output: "ERROR".to_string(),
        },
    ];

    write_answers(&output_path.to_string_lossy(), &answers)
        .await
        .expect("写入答案失败");

    let saved = read_answers(&output_path.to_string_lossy())
        .await
        .expect("重新读取答案失败");

    validate_results(questions.len(), &saved).expect("答案格式校验应该通过");
}

/// 顶层不是数组的输入文件应该在启动期被拒绝
#[tokio::test]
async fn test_non_list_input_rejected() {
    let input_path = std::env::temp_dir().join("generate_answers_it_nonlist.json");
    tokio::fs::write(&input_path, r#"{"input": "not a list"}"#)
        .await
        .expect("写入文件失败");

    let result = load_questions(&input_path.to_string_lossy()).await;
    assert!(result.is_err(), "非数组输入应该报错");
}

/// 答案数量少于题目数量时校验必须失败
#[tokio::test]
async fn test_validation_rejects_short_answer_list() {
    let output_path = std::env::temp_dir().join("generate_answers_it_short.json");

    let answers = vec![AnswerRecord {
        output: "只有一条".to_string(),
    }];
    write_answers(&output_path.to_string_lossy(), &answers)
        .await
        .expect("写入答案失败");

    let saved = read_answers(&output_path.to_string_lossy())
        .await
        .expect("重新读取答案失败");

    assert!(validate_results(2, &saved).is_err());
}

/// 端到端冒烟测试，需要可访问的 LLM 端点
/// 手动运行：cargo test -- --ignored
#[tokio::test]
#[ignore]
async fn test_end_to_end_against_live_endpoint() {
    logging::init();

    let input_path = std::env::temp_dir().join("generate_answers_it_live_questions.json");
    let output_path = std::env::temp_dir().join("generate_answers_it_live_answers.json");

    tokio::fs::write(&input_path, r#"[{"input": "What is 1+1? Answer with a number."}]"#)
        .await
        .expect("写入题目文件失败");

    let mut config = Config::from_env();
    config.input_path = input_path.to_string_lossy().to_string();
    config.output_path = output_path.to_string_lossy().to_string();

    let app = App::initialize(config).expect("初始化应用失败");
    app.run().await.expect("整批运行应该成功");

    let saved = read_answers(&output_path.to_string_lossy())
        .await
        .expect("读取答案失败");
    assert_eq!(saved.len(), 1);
}
