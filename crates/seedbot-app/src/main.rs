mod cli;
mod repl;
mod session_task;

use tracing_subscriber::EnvFilter;

use seedbot_ai::GeminiConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/seedbot-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("seedbot=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "seedbot=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("seedbot v{} starting...", env!("CARGO_PKG_VERSION"));

    // Credential is a startup-time requirement, not discovered mid-chat.
    let mut config = match GeminiConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("GEMINI_API_KEY 환경 변수를 설정한 뒤 다시 실행해주세요.");
            std::process::exit(1);
        }
    };
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    if let Some(temperature) = args.temperature {
        config = config.with_temperature(temperature);
    }
    tracing::info!(config = ?config, "configuration loaded");

    if let Err(e) = repl::run(config).await {
        tracing::error!("fatal: {e}");
        std::process::exit(1);
    }
    tracing::info!("shutdown complete");
}
