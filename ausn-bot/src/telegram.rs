//! Telegram transport adapter.
//!
//! Wires teloxide's long-polling dispatcher into [`ConversationFlow`]:
//! commands and plain text become flow events, and the flow's replies go
//! back out through [`TelegramGateway`].

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use teloxide::Bot;
use teloxide::dispatching::{Dispatcher, HandlerExt, MessageFilterExt, UpdateFilterExt};
use teloxide::dptree;
use teloxide::payloads::SendMessageSetters;
use teloxide::requests::{Requester, ResponseResult};
use teloxide::types::{Message, ParseMode, Update};
use teloxide::utils::command::BotCommands;
use tracing::info;

use ausn_flow::{
    ChatId, ConversationFlow, GatewayError, Markup, MessageGateway, Reply, deliver,
};

/// Commands registered with Telegram.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "begin a new calculation")]
    Start,
    #[command(description = "show help")]
    Help,
    #[command(description = "cancel the current calculation")]
    Cancel,
}

/// [`MessageGateway`] backed by the Telegram Bot API.
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageGateway for TelegramGateway {
    async fn send_text(
        &self,
        chat: ChatId,
        reply: &Reply,
    ) -> Result<(), GatewayError> {
        let request = self
            .bot
            .send_message(teloxide::types::ChatId(chat.0), reply.text.clone());
        let request = match reply.markup {
            Markup::Html => request.parse_mode(ParseMode::Html),
            Markup::Plain => request,
        };
        request
            .await
            .map(drop)
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

/// Registers the command menu and long-polls until shutdown.
pub async fn run(
    bot: Bot,
    flow: Arc<ConversationFlow>,
) -> Result<()> {
    bot.set_my_commands(Command::bot_commands()).await?;

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            // Unknown /commands fall through to nothing rather than being
            // mistaken for amounts.
            Message::filter_text()
                .filter(|text: String| !text.starts_with('/'))
                .endpoint(handle_text),
        );

    info!("starting long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![flow])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(
    bot: Bot,
    flow: Arc<ConversationFlow>,
    msg: Message,
    cmd: Command,
) -> ResponseResult<()> {
    let chat = ChatId(msg.chat.id.0);
    let replies = match cmd {
        Command::Start => flow.start(chat),
        Command::Help => flow.help(),
        Command::Cancel => flow.cancel(chat),
    };
    deliver(&TelegramGateway::new(bot), chat, &replies).await;
    Ok(())
}

async fn handle_text(
    bot: Bot,
    flow: Arc<ConversationFlow>,
    msg: Message,
    text: String,
) -> ResponseResult<()> {
    let chat = ChatId(msg.chat.id.0);
    let replies = flow.text(chat, &text);
    deliver(&TelegramGateway::new(bot), chat, &replies).await;
    Ok(())
}
