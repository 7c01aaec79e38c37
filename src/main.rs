// src/main.rs

use std::time::Duration;

use dotenvy::dotenv;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_quiz::{
    AppState,
    config::Config,
    console::{self, Console},
    quiz::QuestionRepository,
    storage::{FileStore, KeyValueStore, MemoryStore},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "quiz.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    // stdout belongs to the quiz itself
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    // A broken question source is reported once; every start then reports
    // that no questions are available.
    let repository = match QuestionRepository::load(&config.questions_path) {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Could not load questions: {}", e.message());
            QuestionRepository::default()
        }
    };

    let store: Box<dyn KeyValueStore> = match FileStore::open(&config.store_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::error!("{}; scores will not be saved this session", e);
            Box::new(MemoryStore::new())
        }
    };

    let mut state = AppState::new(repository, store);
    let mut console = Console::new(&mut state, config.share_url.clone());

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    if let Err(e) = console::run(
        &mut console,
        input,
        output,
        Duration::from_millis(config.tick_millis),
    )
    .await
    {
        tracing::error!("Console I/O failed: {}", e);
    }
}
