use super::*;

#[test]
fn editor_has_cursor_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::Left)),
        Some(&Command::CursorLeft)
    );
}

#[test]
fn global_commands_fall_through_in_every_context() {
    let service = KeybindingService::new();
    let ctrl_l = Key::ctrl(KeyCode::Char('l'));
    for context in [
        KeybindingContext::Editor,
        KeybindingContext::Explorer,
        KeybindingContext::Chat,
    ] {
        assert_eq!(service.resolve(context, &ctrl_l), Some(&Command::ToggleChat));
    }
}

#[test]
fn explorer_overrides_arrow_keys() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::Left)),
        Some(&Command::ExplorerCollapse)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::shift(KeyCode::Char('a'))),
        Some(&Command::ExplorerNewFolder)
    );
}

#[test]
fn show_welcome_has_two_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::F(2))),
        Some(&Command::ShowWelcome)
    );
    assert_eq!(
        service.resolve(
            KeybindingContext::Global,
            &Key::ctrl_shift(KeyCode::Char('w'))
        ),
        Some(&Command::ShowWelcome)
    );
}

#[test]
fn chat_enter_sends() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Chat, &Key::simple(KeyCode::Enter)),
        Some(&Command::ChatSend)
    );
}

#[test]
fn rules_rebind_and_unbind() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        KeybindingRule {
            key: "ctrl+k".to_string(),
            command: "toggleTerminal".to_string(),
            context: None,
        },
        KeybindingRule {
            key: "d".to_string(),
            command: String::new(),
            context: Some("explorer".to_string()),
        },
        KeybindingRule {
            key: "ctrl+x".to_string(),
            command: "quit".to_string(),
            context: Some("nowhere".to_string()),
        },
    ]);

    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('k'))),
        Some(&Command::ToggleTerminal)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::Char('d'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('x'))),
        None
    );
}

#[test]
fn context_parse_accepts_aliases() {
    assert_eq!(
        KeybindingContext::parse(" Sidebar "),
        Some(KeybindingContext::Explorer)
    );
    assert_eq!(KeybindingContext::parse("chat"), Some(KeybindingContext::Chat));
    assert_eq!(KeybindingContext::parse("palette"), None);
}
