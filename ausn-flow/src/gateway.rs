//! Outbound message port.
//!
//! The dialogue produces [`Reply`] values; a transport adapter implements
//! [`MessageGateway`] to put them on the wire. Delivery is
//! fire-and-forget: failures are logged and never fed back into the
//! dialogue state.

use async_trait::async_trait;
use thiserror::Error;
use tracing::error;

use crate::session::ChatId;

/// How a reply's text should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Verbatim text.
    Plain,
    /// Text with HTML bold spans and line breaks.
    Html,
}

/// A single outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markup: Markup,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Plain,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Html,
        }
    }
}

/// Errors a transport adapter can report back from a send.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),
}

/// Transport seam: anything that can push a reply to a chat.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn send_text(
        &self,
        chat: ChatId,
        reply: &Reply,
    ) -> Result<(), GatewayError>;
}

/// Sends each reply in order, logging failures without propagating them.
/// A failed send never alters dialogue state and is not retried.
pub async fn deliver(
    gateway: &dyn MessageGateway,
    chat: ChatId,
    replies: &[Reply],
) {
    for reply in replies {
        if let Err(error) = gateway.send_text(chat, reply).await {
            error!(chat = %chat, ?error, "failed to deliver reply");
        }
    }
}
