//! Console bot example.
//!
//! This example demonstrates how to wire the engine together and drive it
//! from stdin, standing in for the webhook layer: each line you type is
//! handled as an inbound customer message on one conversation, and every
//! broadcast event is printed as it arrives.
//!
//! Run with: cargo run -p orchestrator --example console_bot
//!
//! Configuration via .env file or environment variables:
//!   SORA_PROVIDER        - Active provider (default: openrouter)
//!   SORA_MODEL           - Model id
//!   OPENROUTER_API_KEY   - OpenRouter credential
//!   GEMINI_API_KEY       - Gemini credential
//!   SORA_SITE_URL        - Order site URL
//!   SORA_BUSINESS_NAME   - Business name

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use orchestrator::{
    AiDispatcher, Broadcaster, ConversationStore, Engine, ReplyOutcome, Settings,
};
use tracing::info;

const CHAT_ID: &str = "console@local";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = Settings::from_env().into_handle();
    let broadcaster = Broadcaster::spawn();
    let engine = Arc::new(Engine::new(
        Arc::new(ConversationStore::new()),
        AiDispatcher::new(settings.clone()),
        broadcaster.clone(),
        settings,
    ));

    // Print every broadcast event, as a connected dashboard would.
    let mut observer = broadcaster.subscribe(64);
    tokio::spawn(async move {
        while let Some(event) = observer.receiver.recv().await {
            info!("event: {:?}", event);
        }
    });

    println!("Type a customer message (Ctrl-D to quit):");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match engine.on_customer_message(CHAT_ID, text).await {
            ReplyOutcome::Reply(reply) => println!("bot> {}", reply),
            ReplyOutcome::NoReply(reason) => println!("bot> (silent: {:?})", reason),
        }
        io::stdout().flush().ok();
    }
}
