use std::time::Duration;

use crate::kernel::chat::ReplyTicket;

/// Side effects requested by the store and carried out by the workbench runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleChatReply { ticket: ReplyTicket, delay: Duration },
    CancelChatReply { ticket: ReplyTicket },
}
