use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use jobcast::config::{ServerConfig, TelegramConfig};
use jobcast::notify::{NoopNotifier, Notifier, TelegramNotifier};
use jobcast::shutdown::install_shutdown_handler;
use jobcast::store::JobStore;
use jobcast::web::{run_server, ApiState, Board};

#[derive(Parser, Debug)]
#[command(name = "jobcast")]
#[command(version)]
#[command(about = "Job posting scheduler with one-hour Telegram announcement slots")]
struct Args {
    /// Address to serve the HTTP API on
    #[arg(long, default_value = "127.0.0.1:8000")]
    listen: SocketAddr,

    /// Telegram bot token; announcements are only logged when absent
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    telegram_bot_token: Option<String>,

    /// Destination channel (@channelname or numeric chat id)
    #[arg(long, env = "TELEGRAM_CHAT_ID", default_value = "@jobskrd")]
    telegram_chat_id: String,

    /// Number of mock jobs to seed the store with
    #[arg(long, default_value_t = 25)]
    mock_jobs: usize,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig {
        listen_addr: args.listen,
        telegram: TelegramConfig {
            bot_token: args.telegram_bot_token,
            chat_id: args.telegram_chat_id,
        },
        mock_jobs: args.mock_jobs,
    };

    let notifier: Arc<dyn Notifier> = match &config.telegram.bot_token {
        Some(token) if config.telegram.is_complete() => {
            tracing::info!(channel = %config.telegram.chat_id, "Telegram delivery enabled");
            Arc::new(TelegramNotifier::new(token.clone()))
        }
        _ => {
            tracing::warn!("No Telegram bot token configured, announcements will only be logged");
            Arc::new(NoopNotifier)
        }
    };

    let board = Board {
        store: JobStore::with_mock_data(config.mock_jobs),
        ..Board::default()
    };

    let state = ApiState {
        board: Arc::new(RwLock::new(board)),
        notifier,
        channel: config.telegram.chat_id.clone(),
    };

    let shutdown = install_shutdown_handler();
    run_server(config.listen_addr, state, shutdown).await;

    tracing::info!("Shutdown complete");
}
