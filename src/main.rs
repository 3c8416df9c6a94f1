//! Study Match - Binary Entry Point
//!
//! Usage:
//!   study-match [deck]      print the ranked deck as JSON lines
//!   study-match ask <text>  send one prompt to the study assistant

use std::env;

use study_match::{AppConfig, AppResult, ChatCompletionsAssistant, JsonFileStore, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    info!(
        name = study_match::NAME,
        version = study_match::VERSION,
        data_file = %config.data_file.display(),
        "starting"
    );

    let store = JsonFileStore::open(&config.data_file, config.bcrypt_cost)?;
    let mut session = Session::load(&store, config.matching.clone())?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("deck") => {
            for entry in session.deck().entries() {
                println!("{}", serde_json::to_string(entry)?);
            }
        }
        Some("ask") => {
            let prompt = args[1..].join(" ");
            let assistant = ChatCompletionsAssistant::new(config.assistant.clone());
            let reply = session.ask_assistant(&assistant, &prompt).await?;
            println!("{}", reply.content);
        }
        Some(other) => {
            return Err(format!("unknown command: {other} (expected `deck` or `ask <text>`)").into());
        }
    }

    Ok(())
}
