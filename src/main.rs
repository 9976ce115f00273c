//! Trivia - 问答游戏 REST API
//!
//! 启动流程: 配置 -> 日志 -> 数据库 -> Repository -> HTTP 服务器

use std::sync::Arc;

use trivia::application::quiz_rng;
use trivia::config::{load_config, print_config, LogConfig};
use trivia::infrastructure::http::{AppState, HttpServer};
use trivia::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, seed_sample_questions, DatabaseConfig,
    SqliteCategoryRepository, SqliteQuestionRepository,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},trivia={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Trivia API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    if config.database.seed_sample_questions {
        seed_sample_questions(&pool).await?;
    }

    // 创建 Repository 适配器
    let question_repo = Arc::new(SqliteQuestionRepository::new(pool.clone()));
    let category_repo = Arc::new(SqliteCategoryRepository::new(pool));

    let state = AppState::new(question_repo, category_repo, quiz_rng(config.quiz.seed));

    let server = HttpServer::new(config.server.addr(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
