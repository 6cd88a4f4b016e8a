use super::*;

#[test]
fn session_opens_with_greeting() {
    let chat = ChatSession::new();
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].role, ChatRole::Assistant);
    assert_eq!(chat.messages()[0].content, CHAT_GREETING);
}

#[test]
fn blank_send_is_ignored() {
    let mut chat = ChatSession::new();
    assert!(chat.send("   ").is_none());
    assert!(chat.send("").is_none());
    assert_eq!(chat.messages().len(), 1);
    assert!(chat.pending().is_none());
}

#[test]
fn send_appends_user_message_then_one_reply() {
    let mut chat = ChatSession::new();

    let outcome = chat.send("hello").unwrap();
    assert!(outcome.superseded.is_none());
    assert_eq!(chat.messages().last().unwrap().role, ChatRole::User);
    assert_eq!(chat.messages().last().unwrap().content, "hello");

    assert!(chat.deliver_reply(outcome.ticket));
    assert!(!chat.deliver_reply(outcome.ticket));

    let last = chat.messages().last().unwrap();
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, CANNED_REPLY);
    assert_eq!(chat.messages().len(), 3);
}

#[test]
fn reply_does_not_depend_on_user_text() {
    let mut a = ChatSession::new();
    let mut b = ChatSession::new();
    let ta = a.send("hello").unwrap().ticket;
    let tb = b.send("how do PDAs work?").unwrap().ticket;
    a.deliver_reply(ta);
    b.deliver_reply(tb);

    assert_eq!(
        a.messages().last().unwrap().content,
        b.messages().last().unwrap().content
    );
}

#[test]
fn new_send_supersedes_pending_reply() {
    let mut chat = ChatSession::new();
    let first = chat.send("one").unwrap();
    let second = chat.send("two").unwrap();

    assert_eq!(second.superseded, Some(first.ticket));
    assert!(!chat.deliver_reply(first.ticket));
    assert!(chat.deliver_reply(second.ticket));

    let assistant_replies = chat
        .messages()
        .iter()
        .filter(|m| m.role == ChatRole::Assistant && m.content == CANNED_REPLY)
        .count();
    assert_eq!(assistant_replies, 1);
}

#[test]
fn cancelled_reply_is_dropped() {
    let mut chat = ChatSession::new();
    let outcome = chat.send("hi").unwrap();
    assert_eq!(chat.cancel_pending(), Some(outcome.ticket));
    assert!(!chat.deliver_reply(outcome.ticket));
}

#[test]
fn submit_input_clears_line_only_on_send() {
    let mut chat = ChatSession::new();
    chat.input_append(' ');
    assert!(chat.submit_input().is_none());
    assert_eq!(chat.input(), " ");

    chat.input_backspace();
    for ch in "gm".chars() {
        chat.input_append(ch);
    }
    assert!(chat.submit_input().is_some());
    assert_eq!(chat.input(), "");
    assert_eq!(chat.messages().last().unwrap().content, "gm");
}
