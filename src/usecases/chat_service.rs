//! BugBot chat session: message history, open/closed state, delayed replies.
//!
//! Owned by the host. In-memory only; dropped when the app exits.

use crate::domain::replies::{GREETING_NOTICE, WELCOME_MESSAGE};
use crate::domain::{DomainError, Message, ReplyTable};
use crate::ports::Scheduler;
use crate::usecases::response_selector::select_reply;
use rand::RngCore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Simulated "typing" time before BugBot answers.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// How long after startup BugBot's greeting notice appears.
pub const DEFAULT_GREETING_DELAY: Duration = Duration::from_millis(2000);

/// Wait `delay`, then hand back the greeting notice. `Cancelled` if the wait is cut short.
pub async fn greeting_after(
    scheduler: &dyn Scheduler,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<&'static str, DomainError> {
    scheduler.after(delay, cancel).await?;
    Ok(GREETING_NOTICE)
}

pub struct ChatSession {
    table: Arc<ReplyTable>,
    scheduler: Arc<dyn Scheduler>,
    rng: Box<dyn RngCore + Send>,
    reply_delay: Duration,
    messages: Vec<Message>,
    is_open: bool,
    cancel: CancellationToken,
}

impl ChatSession {
    pub fn new(
        table: Arc<ReplyTable>,
        scheduler: Arc<dyn Scheduler>,
        rng: Box<dyn RngCore + Send>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            table,
            scheduler,
            rng,
            reply_delay,
            messages: Vec::new(),
            is_open: false,
            cancel: CancellationToken::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Open the chat. An empty history gets the welcome message first.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        if self.cancel.is_cancelled() {
            self.cancel = CancellationToken::new();
        }
        if self.messages.is_empty() {
            self.messages.push(Message::assistant(WELCOME_MESSAGE));
        }
        debug!(history = self.messages.len(), "chat opened");
    }

    /// Close the chat and drop any pending reply.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.cancel.cancel();
        debug!("chat closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Token that aborts the pending reply when fired (e.g. from a Ctrl-C handler).
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Record the user's message, wait the reply delay, then append and return BugBot's answer.
    ///
    /// Whitespace-only input is rejected and nothing is recorded. A closed session rejects
    /// with `Cancelled` and records nothing. If the wait is cancelled, the user message stays
    /// in history but no reply is appended.
    pub async fn send_message(&mut self, input: &str) -> Result<Message, DomainError> {
        if input.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if !self.is_open || self.cancel.is_cancelled() {
            debug!("message sent to a closed chat");
            return Err(DomainError::Cancelled);
        }

        self.messages.push(Message::user(input));

        let cancel = self.cancel.clone();
        self.scheduler.after(self.reply_delay, &cancel).await?;

        let text = select_reply(&self.table, input, &mut *self.rng).to_owned();
        let reply = Message::assistant(text);
        info!(
            input_len = input.len(),
            history = self.messages.len() + 1,
            "bugbot replied"
        );
        self.messages.push(reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scheduler::{ImmediateScheduler, TokioScheduler};
    use crate::domain::{Category, Origin};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn session(scheduler: Arc<dyn Scheduler>) -> ChatSession {
        ChatSession::new(
            Arc::new(ReplyTable::builtin()),
            scheduler,
            Box::new(StdRng::seed_from_u64(3)),
            DEFAULT_REPLY_DELAY,
        )
    }

    #[test]
    fn test_first_open_adds_welcome_once() {
        let mut chat = session(Arc::new(ImmediateScheduler));
        assert!(chat.messages().is_empty());

        chat.toggle();
        assert!(chat.is_open());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
        assert!(chat.messages()[0].is_assistant());

        chat.toggle();
        chat.toggle();
        assert_eq!(chat.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_send_message_appends_user_and_reply() {
        let mut chat = session(Arc::new(ImmediateScheduler));
        chat.open();

        let reply = chat.send_message("HELLO there").await.unwrap();

        let table = ReplyTable::builtin();
        assert!(table.replies(Category::Greeting).contains(&reply.text));
        let history = chat.messages();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].origin, Origin::User);
        assert_eq!(history[1].text, "HELLO there");
        assert_eq!(history[2].origin, Origin::Assistant);
        assert_ne!(history[1].id, history[2].id);
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let mut chat = session(Arc::new(ImmediateScheduler));
        chat.open();
        assert_eq!(
            chat.send_message("   ").await.unwrap_err(),
            DomainError::EmptyMessage
        );
        assert_eq!(chat.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_injected_rng_gives_exact_reply() {
        let mut chat = ChatSession::new(
            Arc::new(ReplyTable::builtin()),
            Arc::new(ImmediateScheduler),
            Box::new(StepRng::new(0, 0)),
            DEFAULT_REPLY_DELAY,
        );
        chat.open();
        let reply = chat
            .send_message("Can you help me with JavaScript?")
            .await
            .unwrap();
        assert_eq!(
            reply.text,
            "I can help you with programming concepts, debugging, project ideas, and learning paths!"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let mut chat = session(Arc::new(TokioScheduler));
        chat.open();
        let start = tokio::time::Instant::now();
        chat.send_message("python").await.unwrap();
        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_is_not_appended() {
        let mut chat = session(Arc::new(TokioScheduler));
        chat.open();
        let handle = chat.cancel_handle();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.cancel();
        });

        let err = chat.send_message("bug").await.unwrap_err();
        assert_eq!(err, DomainError::Cancelled);
        // welcome + user message, no reply
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1].origin, Origin::User);
    }

    #[tokio::test]
    async fn test_reopen_after_close_replies_again() {
        let mut chat = session(Arc::new(ImmediateScheduler));
        chat.open();
        chat.close();
        assert!(chat.cancel_handle().is_cancelled());

        chat.open();
        assert!(!chat.cancel_handle().is_cancelled());
        assert!(chat.send_message("project").await.is_ok());
    }

    #[tokio::test]
    async fn test_closed_chat_rejects_without_recording() {
        let mut chat = session(Arc::new(ImmediateScheduler));
        chat.open();
        chat.close();

        let err = chat.send_message("hello").await.unwrap_err();
        assert_eq!(err, DomainError::Cancelled);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_never_opened_chat_rejects() {
        let mut chat = session(Arc::new(ImmediateScheduler));
        let err = chat.send_message("hello").await.unwrap_err();
        assert_eq!(err, DomainError::Cancelled);
        assert!(chat.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_appears_after_delay() {
        let cancel = CancellationToken::new();
        let start = tokio::time::Instant::now();
        let notice = greeting_after(&TokioScheduler, DEFAULT_GREETING_DELAY, &cancel)
            .await
            .unwrap();
        assert_eq!(notice, GREETING_NOTICE);
        assert!(start.elapsed() >= DEFAULT_GREETING_DELAY);
    }

    #[tokio::test]
    async fn test_cancelled_greeting_is_skipped() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = greeting_after(&ImmediateScheduler, DEFAULT_GREETING_DELAY, &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Cancelled);
    }
}
