use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_chat_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SendChatMessage { text } => {
                let outcome = self.state.chat.send(&text);
                self.chat_send_result(outcome)
            }
            Action::ChatInputSubmit => {
                let outcome = self.state.chat.submit_input();
                self.chat_send_result(outcome)
            }
            Action::ChatReplyDue { ticket } => {
                let delivered = self.state.chat.deliver_reply(ticket);
                if !delivered {
                    tracing::debug!(ticket = ticket.raw(), "stale chat reply dropped");
                }
                super::DispatchResult::changed(delivered)
            }
            Action::ChatInputAppend(ch) => {
                if ch.is_control() {
                    return super::DispatchResult::changed(false);
                }
                self.state.chat.input_append(ch);
                super::DispatchResult::changed(true)
            }
            Action::ChatInputBackspace => {
                super::DispatchResult::changed(self.state.chat.input_backspace())
            }
            _ => unreachable!("non-chat action passed to reduce_chat_action"),
        }
    }

    fn chat_send_result(
        &mut self,
        outcome: Option<crate::kernel::chat::SendOutcome>,
    ) -> super::DispatchResult {
        let Some(outcome) = outcome else {
            return super::DispatchResult::changed(false);
        };

        let mut effects = Vec::with_capacity(2);
        if let Some(ticket) = outcome.superseded {
            effects.push(Effect::CancelChatReply { ticket });
        }
        effects.push(Effect::ScheduleChatReply {
            ticket: outcome.ticket,
            delay: self.state.config.chat_reply_delay(),
        });
        tracing::debug!(ticket = outcome.ticket.raw(), "chat reply scheduled");

        super::DispatchResult {
            effects,
            state_changed: true,
        }
    }
}
