pub mod message;
pub mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;

use crate::error::Result;

/// Outbound notification sink.
///
/// Delivery is fire-and-forget from the scheduler's point of view: a
/// failed send surfaces as a transmission error but never rolls back
/// scheduling already performed.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str, channel: &str) -> Result<()>;
}

/// Sink that logs instead of transmitting. Used when no bot token is
/// configured, and as the test double.
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, text: &str, channel: &str) -> Result<()> {
        tracing::info!(
            channel = %channel,
            chars = text.chars().count(),
            "Simulated channel post"
        );
        Ok(())
    }
}
