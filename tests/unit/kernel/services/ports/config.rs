use super::*;

#[test]
fn default_delay_is_one_second() {
    let config = IdeConfig::default();
    assert_eq!(config.chat_reply_delay(), Duration::from_millis(1000));
}

#[test]
fn settings_override_reply_delay_only() {
    let mut settings = Settings::default();
    settings.chat.reply_delay_ms = 50;

    let config = IdeConfig::from_settings(&settings);
    assert_eq!(config.chat_reply_delay_ms, 50);
    assert_eq!(config.tab_size, IdeConfig::default().tab_size);
}

#[test]
fn scroll_step_is_never_zero() {
    let config = IdeConfig {
        scroll_lines: 0,
        ..IdeConfig::default()
    };
    assert_eq!(config.scroll_step(), 1);
}
