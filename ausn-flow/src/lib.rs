//! Dialogue logic for the AUSN calculator bot.
//!
//! This crate is transport-agnostic: the Telegram adapter lives in
//! `ausn-bot` behind the [`MessageGateway`] port defined here.

pub mod flow;
pub mod gateway;
pub mod messages;
pub mod report;
pub mod session;

pub use flow::ConversationFlow;
pub use gateway::{GatewayError, Markup, MessageGateway, Reply, deliver};
pub use session::{ChatId, DialogueState, Session, SessionStore};
