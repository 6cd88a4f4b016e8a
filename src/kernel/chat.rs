//! Scripted assistant chat.
//!
//! Every user message is answered with the same canned reply after a delay. The
//! reply is tracked by a [`ReplyTicket`]; only the ticket that is still pending
//! may deliver, so a superseded or cancelled reply is dropped on arrival.

pub const CHAT_GREETING: &str =
    "Hello! I'm Código AI. I can help you with Solana development. What would you like to work on?";

pub const CANNED_REPLY: &str = "I can help you with that! For Solana development, I recommend \
focusing on understanding PDAs (Program Derived Addresses) and proper account management. Would \
you like me to explain more about the escrow program structure?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

impl ReplyTicket {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    pub ticket: ReplyTicket,
    pub superseded: Option<ReplyTicket>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    next_ticket: u64,
    pending: Option<ReplyTicket>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: CHAT_GREETING.to_string(),
            }],
            input: String::new(),
            next_ticket: 1,
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending(&self) -> Option<ReplyTicket> {
        self.pending
    }

    pub fn input_append(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn input_backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Appends a user message and arms a new reply ticket, superseding any
    /// reply still in flight. Blank text is ignored.
    pub fn send(&mut self, text: &str) -> Option<SendOutcome> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: text.to_string(),
        });
        self.input.clear();

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        let superseded = self.pending.replace(ticket);
        Some(SendOutcome { ticket, superseded })
    }

    /// Sends whatever is in the input line.
    pub fn submit_input(&mut self) -> Option<SendOutcome> {
        let text = std::mem::take(&mut self.input);
        let outcome = self.send(&text);
        if outcome.is_none() {
            self.input = text;
        }
        outcome
    }

    /// Appends the canned reply if `ticket` is the one still pending.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: CANNED_REPLY.to_string(),
        });
        true
    }

    pub fn cancel_pending(&mut self) -> Option<ReplyTicket> {
        self.pending.take()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/chat.rs"]
mod tests;
