use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::CursorLeft.name(), "cursorLeft");
    assert_eq!(Command::ExplorerNewFile.name(), "explorerNewFile");
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn test_from_name_inverts_name() {
    for cmd in [
        Command::CursorFileEnd,
        Command::ShowWelcome,
        Command::ToggleChat,
        Command::ToggleTerminal,
        Command::ExplorerRename,
        Command::OpenEscrowContract,
        Command::ChatSend,
    ] {
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
    assert_eq!(
        Command::from_name("notACommand"),
        Command::Custom("notACommand".to_string())
    );
}

#[test]
fn test_is_edit_command() {
    assert!(Command::InsertNewline.is_edit_command());
    assert!(Command::DeleteBackward.is_edit_command());
    assert!(!Command::CursorLeft.is_edit_command());
    assert!(!Command::ToggleChat.is_edit_command());
}
