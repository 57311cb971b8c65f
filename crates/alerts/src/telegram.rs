//! Telegram delivery.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
}

/// Telegram bot wrapper that delivers alert digests to a single chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a notifier for the given bot token and chat id.
    ///
    /// Neither is validated here; a bad credential surfaces as a logged
    /// failure on the first send.
    pub fn new(token: &str, chat_id: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id: chat_id.into(),
        }
    }

    /// Send one message with HTML rendering enabled.
    pub async fn send(&self, message: &str) -> Result<(), TelegramError> {
        let chat_id = ChatId(self.chat_id.parse().unwrap_or(0));
        self.bot
            .send_message(chat_id, message)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    /// Deliver a message, swallowing failures.
    ///
    /// Delivery is best-effort: an error is logged and the message is lost,
    /// the polling loop is never interrupted.
    pub async fn notify(&self, message: &str) {
        match self.send(message).await {
            Ok(()) => info!("Notification sent"),
            Err(e) => error!(error = %e, "Error while sending Telegram notification"),
        }
    }
}
