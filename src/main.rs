use anyhow::Result;
use generate_answers::config::Config;
use generate_answers::orchestrator::App;
use generate_answers::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
