use std::net::SocketAddr;

/// Telegram delivery configuration.
///
/// When no bot token is present the server still runs, but announcements
/// are logged instead of transmitted.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token. Comes from the environment, never hardcoded.
    pub bot_token: Option<String>,
    /// Destination channel (`@channelname` or numeric chat id).
    pub chat_id: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: "@jobskrd".to_string(),
        }
    }
}

impl TelegramConfig {
    /// Check whether real delivery is possible.
    pub fn is_complete(&self) -> bool {
        self.bot_token.as_deref().is_some_and(|t| !t.is_empty()) && !self.chat_id.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub telegram: TelegramConfig,
    /// Number of mock jobs seeded into the store at startup.
    pub mock_jobs: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // SAFETY: This is a hardcoded valid address that will always parse
            listen_addr: "127.0.0.1:8000"
                .parse()
                .expect("default listen address is valid"),
            telegram: TelegramConfig::default(),
            mock_jobs: 25,
        }
    }
}

impl ServerConfig {
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            ..Default::default()
        }
    }

    pub fn with_telegram(mut self, telegram: TelegramConfig) -> Self {
        self.telegram = telegram;
        self
    }
}
