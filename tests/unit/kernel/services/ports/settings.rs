use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(settings.keybindings.is_empty());
    assert_eq!(settings.chat.reply_delay_ms, DEFAULT_CHAT_REPLY_DELAY_MS);
}

#[test]
fn chat_delay_and_keybindings_parse() {
    let data = r#"{
      "keybindings": [
        { "key": "ctrl+k", "command": "toggleChat" },
        { "key": "x", "command": "explorerDelete", "context": "explorer" }
      ],
      "chat": { "replyDelayMs": 250 }
    }"#;
    let settings: Settings = serde_json::from_str(data).unwrap();

    assert_eq!(settings.chat.reply_delay_ms, 250);
    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("explorer"));
}

#[test]
fn default_settings_serialize_with_chat_section() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    assert!(json.contains("\"replyDelayMs\": 1000"));
}
