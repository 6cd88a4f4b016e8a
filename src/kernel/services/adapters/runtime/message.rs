use crate::kernel::ReplyTicket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    ChatReplyDue { ticket: ReplyTicket },
}
