//! The dialogue state machine.
//!
//! Commands (/start, /help, /cancel) and freeform text arrive as separate
//! events; each handler returns the replies to deliver, in order. A chat's
//! session lock is held for the whole parse-validate-transition sequence,
//! so events for one chat never interleave.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use ausn_core::{AUSN_INCOME_LIMIT, flat_rate, parse_amount, profit_based, recommend};

use crate::gateway::Reply;
use crate::messages;
use crate::report;
use crate::session::{ChatId, DialogueState, Session, SessionStore};

/// Outcome of one text event against a session.
struct Step {
    replies: Vec<Reply>,
    completed: bool,
}

impl Step {
    fn stay(reply: Reply) -> Self {
        Self {
            replies: vec![reply],
            completed: false,
        }
    }
}

/// The dialogue controller. One instance serves every chat.
#[derive(Debug, Default)]
pub struct ConversationFlow {
    sessions: SessionStore,
}

impl ConversationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// /start: begins a fresh dialogue, discarding any previous one.
    pub fn start(&self, chat: ChatId) -> Vec<Reply> {
        self.sessions.create(chat);
        info!(chat = %chat, "dialogue started");
        vec![Reply::html(messages::WELCOME)]
    }

    /// /help: static text, independent of dialogue state.
    pub fn help(&self) -> Vec<Reply> {
        vec![Reply::html(messages::HELP)]
    }

    /// /cancel: drops the chat's session. Acknowledges even when there
    /// was nothing to cancel.
    pub fn cancel(&self, chat: ChatId) -> Vec<Reply> {
        let existed = self.sessions.remove(chat);
        info!(chat = %chat, existed, "dialogue cancelled");
        vec![Reply::plain(messages::CANCELLED)]
    }

    /// Freeform text: one step of the state machine.
    pub fn text(
        &self,
        chat: ChatId,
        raw: &str,
    ) -> Vec<Reply> {
        let Some(entry) = self.sessions.get(chat) else {
            return vec![Reply::plain(messages::NO_ACTIVE_DIALOGUE)];
        };

        let mut session = entry.lock().unwrap();
        // The dialogue may have completed or restarted while this event
        // waited on the lock; such an event belongs to a dead session.
        let still_current = self
            .sessions
            .get(chat)
            .is_some_and(|current| Arc::ptr_eq(&current, &entry));
        if !still_current {
            debug!(chat = %chat, "dropping event for a superseded session");
            return Vec::new();
        }
        let step = match session.state {
            DialogueState::AwaitingIncome => income_step(&mut session, raw),
            DialogueState::AwaitingExpenses => expenses_step(&mut session, raw),
        };

        if step.completed {
            let elapsed = (Utc::now() - session.started_at).num_seconds();
            info!(chat = %chat, elapsed_secs = elapsed, "dialogue completed");
            self.sessions.remove(chat);
        }

        step.replies
    }

    /// Whether the chat currently has a running dialogue. Intended for
    /// tests and adapter diagnostics.
    pub fn has_session(&self, chat: ChatId) -> bool {
        self.sessions.contains(chat)
    }
}

/// Handles text while waiting for the income figure.
fn income_step(
    session: &mut Session,
    raw: &str,
) -> Step {
    let income = match parse_amount(raw) {
        Ok(value) => value,
        Err(_) => return Step::stay(Reply::plain(messages::INCOME_PARSE_ERROR)),
    };

    if income <= Decimal::ZERO {
        return Step::stay(Reply::plain(messages::INCOME_NOT_POSITIVE));
    }

    let mut replies = Vec::new();
    if income > AUSN_INCOME_LIMIT {
        replies.push(Reply::html(messages::INCOME_OVER_LIMIT));
    }

    session.pending_income = Some(income);
    session.state = DialogueState::AwaitingExpenses;
    replies.push(Reply::html(messages::income_accepted(income)));

    Step {
        replies,
        completed: false,
    }
}

/// Handles text while waiting for the expenses figure; on success this
/// runs both calculations and closes the dialogue with the report.
fn expenses_step(
    session: &mut Session,
    raw: &str,
) -> Step {
    let expenses = match parse_amount(raw) {
        Ok(value) => value,
        Err(_) => return Step::stay(Reply::plain(messages::EXPENSES_PARSE_ERROR)),
    };

    if expenses < Decimal::ZERO {
        return Step::stay(Reply::plain(messages::EXPENSES_NEGATIVE));
    }

    // Invariant: AwaitingExpenses implies pending_income is set.
    let Some(income) = session.pending_income else {
        warn!("session in AwaitingExpenses with no pending income; restarting");
        session.state = DialogueState::AwaitingIncome;
        return Step::stay(Reply::plain(messages::INCOME_PARSE_ERROR));
    };

    let mut replies = Vec::new();
    if expenses > income {
        replies.push(Reply::html(messages::EXPENSES_EXCEED_INCOME));
    }

    let flat = flat_rate(income);
    let profit = profit_based(income, expenses);
    let pick = recommend(&flat, &profit);
    replies.push(Reply::html(report::render(
        income, expenses, &flat, &profit, &pick,
    )));

    Step {
        replies,
        completed: true,
    }
}
