use super::message::AppMessage;
use crate::kernel::{Effect, ReplyTicket};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

type PendingReplies = Arc<Mutex<FxHashMap<ReplyTicket, JoinHandle<()>>>>;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    pending: PendingReplies,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            pending: Arc::default(),
        })
    }

    pub fn apply(&self, effect: Effect) {
        match effect {
            Effect::ScheduleChatReply { ticket, delay } => self.schedule_chat_reply(ticket, delay),
            Effect::CancelChatReply { ticket } => {
                self.cancel_chat_reply(ticket);
            }
        }
    }

    pub fn schedule_chat_reply(&self, ticket: ReplyTicket, delay: Duration) {
        // Held across the spawn so a short timer cannot fire before it is registered.
        let Ok(mut table) = self.pending.lock() else {
            tracing::error!("pending reply table poisoned");
            return;
        };

        let tx = self.tx.clone();
        let pending = Arc::clone(&self.pending);
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Ok(mut pending) = pending.lock() {
                pending.remove(&ticket);
            }
            if tx.send(AppMessage::ChatReplyDue { ticket }).is_err() {
                tracing::debug!(ticket = ticket.raw(), "chat reply receiver dropped");
            }
        });

        if let Some(prev) = table.insert(ticket, handle) {
            prev.abort();
        }
    }

    /// Aborts a scheduled reply. Returns false when it already fired or was never scheduled.
    pub fn cancel_chat_reply(&self, ticket: ReplyTicket) -> bool {
        let handle = self
            .pending
            .lock()
            .ok()
            .and_then(|mut pending| pending.remove(&ticket));
        match handle {
            Some(handle) => {
                handle.abort();
                tracing::debug!(ticket = ticket.raw(), "chat reply cancelled");
                true
            }
            None => false,
        }
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            for (_, handle) in pending.drain() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
