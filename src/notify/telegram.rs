use async_trait::async_trait;
use serde::Serialize;

use crate::error::{JobcastError, Result};
use crate::notify::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Notifier backed by the Telegram Bot API `sendMessage` call.
///
/// The channel identifier is the chat id (`@channelname` or numeric id)
/// passed per send; the bot token is fixed at construction.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    bot_token: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token: bot_token.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str, channel: &str) -> Result<()> {
        let response = self
            .http
            .post(self.send_message_url())
            .json(&SendMessageRequest {
                chat_id: channel,
                text,
            })
            .send()
            .await
            .map_err(|e| JobcastError::Transmission(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JobcastError::Transmission(format!(
                "Telegram API returned {status}: {body}"
            )));
        }

        tracing::info!(channel = %channel, "Posted message to Telegram channel");
        Ok(())
    }
}
